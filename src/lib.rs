/*!
`forager` — validated interpolation helpers plus a minimal foraging entity.

What it does
- Exposes clamp / lerp / inverse-lerp (and clamped variants) over a runtime
  `Value` tagged union, validating operands the way a scripting-facing
  surface must: numbers pass, strings/lists/maps/bools/null are rejected
  with `Error::InvalidArgument`.
- Keeps an `unchecked` core of plain `f64` helpers for callers that already
  hold numbers.
- Models one `Animal` (feature `entity`, on by default): identity and food
  preferences, foraging over an `Area`, and a strictly-FIFO stomach buffer
  drained one item at a time.

How to use (call surface only)
- Numeric: `interp::lerp(5, 10, 0.5)? == 7.5`,
  `interp::clamp(0, 5, 8)? == 5.0`,
  `interp::inverse_lerp_clamp(0, 5, 10)? == 1.0`.
- Entity: build with `Animal::new(name, kind, preferred_foods)`, then
  `find_food(&area)?` → `eat_food(item)` → `plop()` (FIFO, `None` when
  empty).

What it does NOT do
- No symmetric clamp: the composition is `max(min(x, hi), lo)`, so with
  inverted bounds the high bound wins. Deliberate; do not "fix".
- No guard on `inverse_lerp` when `max == min` (IEEE inf/NaN flows out).
- No concurrency, persistence, or I/O. All operations are in-memory and
  synchronous.
*/

pub mod error;
pub mod interp;
pub mod value;

#[cfg(feature = "entity")]
pub mod animal;

pub use error::Error;
pub use value::Value;

#[cfg(feature = "entity")]
pub use animal::{Animal, Area};
