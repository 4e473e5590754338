/// Default values for configuration fields

pub fn output_dir() -> String {
    "media".to_string()
}

pub fn base_path() -> String {
    "/".to_string()
}

pub fn concurrency() -> usize {
    0  // 0 = unbounded
}

pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# ===============================================================================
# AutoFilm Configuration
# ===============================================================================

[settings]
output_dir = "media"                 # Local mirror root (relative to the working directory if not absolute)
library_mode = false                 # Write every .strm file into output_dir, discarding remote folders
subtitle = false                     # Download subtitles (ass/srt/ssa/sub)
img = false                          # Download images (png/jpg)
nfo = false                          # Download .nfo metadata
concurrency = 0                      # Max files processed at once per server (0 = unbounded)

# ===============================================================================
# ALIST SERVERS
# ===============================================================================
# Servers are crawled one after another. subtitle/img/nfo are ignored when
# library_mode is enabled.

#[[servers]]
#name = "home"                       # Display name (defaults to url)
#url = "http://localhost:5244"       # AList base URL
#username = "admin"                  # AList username
#password = ""                       # AList password
#base_path = "/"                     # Remote folder to mirror
#token = ""                          # Signing secret; leave empty for unsigned URLs
"#;
