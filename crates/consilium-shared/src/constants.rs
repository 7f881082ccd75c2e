/// Application name
pub const APP_NAME: &str = "Consilium";

/// Maximum attachment size in bytes (50 MiB)
pub const MAX_ATTACHMENT_SIZE: usize = 50 * 1024 * 1024;

/// Media type prefix that classifies an attachment as an image
pub const IMAGE_MEDIA_PREFIX: &str = "image/";

/// Body template prefix for attachment messages ("file sent: <name>")
pub const ATTACHMENT_BODY_PREFIX: &str = "file sent: ";

/// Scheme of the local attachment reference urls
pub const ATTACHMENT_URL_SCHEME: &str = "blob:";

/// User id of the signed-in doctor when nothing is configured
pub const DEFAULT_CURRENT_USER_ID: u64 = 7;

/// Capacity of the change-event broadcast channel
pub const EVENT_CHANNEL_CAPACITY: usize = 256;
