// Tab history services
// Services handle I/O around the in-memory managers.

pub mod config_loader;
