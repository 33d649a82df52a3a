// PURPOSE: Exposes all command sub-modules under one `commands::*` surface.

pub mod calculator;
pub mod dates;

pub use self::calculator::*;
pub use self::dates::*;
