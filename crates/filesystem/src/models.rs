/// Local filesystem operations for the output mirror
pub struct FileSystem;
