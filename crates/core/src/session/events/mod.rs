pub mod caption_added;
pub mod caption_removed;
pub mod caption_replaced;
pub mod duration_loaded;
pub mod playback_progressed;
pub mod video_url_changed;

pub use caption_added::*;
pub use caption_removed::*;
pub use caption_replaced::*;
pub use duration_loaded::*;
pub use playback_progressed::*;
pub use video_url_changed::*;
