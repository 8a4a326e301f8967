pub use crate::application::{Application, Headless, Settings};
pub use crate::errors::{Error, Result};
pub use crate::input::prelude::*;
pub use crate::math::prelude::*;
pub use crate::utils::prelude::*;
pub use crate::video::prelude::*;
