//! Per-node metadata shown in `ls -al` columns.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::perms::{Permissions, Triad};

/// Single-character file classifier shown at the start of a mode string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
    /// `d`
    Directory,
    /// `l`
    Link,
    /// `-`
    Regular,
}

impl FileType {
    pub fn as_char(self) -> char {
        match self {
            Self::Directory => 'd',
            Self::Link => 'l',
            Self::Regular => '-',
        }
    }
}

/// Immutable metadata attached to a node at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    /// Permission bits.
    pub perms: Permissions,
    /// Hard-link count.
    pub links: u64,
    /// Owner user name.
    pub user: String,
    /// Owner group name.
    pub group: String,
    /// Size in bytes.
    pub size: u64,
    /// Last-modified timestamp.
    pub modified: DateTime<Utc>,
}

impl Metadata {
    /// The uniform placeholder metadata used across the tree:
    /// `rw-r--r--`, one link, owned by `www:www`, size 1.
    pub fn placeholder(modified: DateTime<Utc>) -> Self {
        Self {
            perms: Permissions {
                user: Triad::new(true, true, false),
                group: Triad::new(true, false, false),
                other: Triad::new(true, false, false),
                ..Permissions::default()
            },
            links: 1,
            user: "www".to_string(),
            group: "www".to_string(),
            size: 1,
            modified,
        }
    }

    /// Same metadata with different permissions.
    pub fn with_perms(&self, perms: Permissions) -> Self {
        Self {
            perms,
            ..self.clone()
        }
    }

    /// Type character followed by permission text, e.g. `drw-r--r--`.
    pub fn mode_string(&self, file_type: FileType) -> String {
        format!("{}{}", file_type.as_char(), self.perms)
    }

    /// Date portion of the ISO timestamp, `YYYY-MM-DD`.
    pub fn date_string(&self) -> String {
        self.modified.format("%Y-%m-%d").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample() -> Metadata {
        Metadata::placeholder(Utc.with_ymd_and_hms(2024, 3, 9, 23, 59, 1).unwrap())
    }

    #[test]
    fn test_placeholder_values() {
        let meta = sample();
        assert_eq!(meta.perms.to_string(), "rw-r--r--");
        assert_eq!(meta.links, 1);
        assert_eq!(meta.user, "www");
        assert_eq!(meta.group, "www");
        assert_eq!(meta.size, 1);
    }

    #[test]
    fn test_mode_string() {
        let meta = sample();
        assert_eq!(meta.mode_string(FileType::Directory), "drw-r--r--");
        assert_eq!(meta.mode_string(FileType::Link), "lrw-r--r--");
        assert_eq!(meta.mode_string(FileType::Regular), "-rw-r--r--");
    }

    #[test]
    fn test_date_string_keeps_date_portion_only() {
        assert_eq!(sample().date_string(), "2024-03-09");
    }

    #[test]
    fn test_with_perms_keeps_everything_else() {
        let meta = sample();
        let open = meta.with_perms(Permissions::parse("rw-rw-rw-").unwrap());
        assert_eq!(open.perms.to_string(), "rw-rw-rw-");
        assert_eq!(open.user, meta.user);
        assert_eq!(open.modified, meta.modified);
    }
}
