mod hooks;
pub use self::hooks::*;

mod json;
pub use self::json::*;

mod plugin;
pub use self::plugin::*;
