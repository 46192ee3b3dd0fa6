//! The junk pattern catalog.
//!
//! Every entry is a glob anchored at a root (a volume or an explicitly
//! requested folder). A trailing `/` marks a directory rule; the tag is
//! decided once here, when the catalog is built, so callers never re-inspect
//! the text.

/// Operating-system family a pattern was written for. Only used for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OsFamily {
    Windows,
    MacOs,
    Linux,
    /// NAS firmwares and cross-platform application leftovers.
    Other,
}

impl OsFamily {
    pub fn label(self) -> &'static str {
        match self {
            OsFamily::Windows => "Windows",
            OsFamily::MacOs => "macOS",
            OsFamily::Linux => "Linux",
            OsFamily::Other => "Other",
        }
    }
}

/// A catalog pattern, tagged with the kind of entry it applies to.
///
/// The carried text is the glob exactly as written in the catalog, including
/// the trailing `/` of directory rules (walked directories carry one too).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JunkPattern {
    Directory(&'static str),
    File(&'static str),
}

impl JunkPattern {
    /// Tags raw catalog text: a trailing `/` makes a directory rule.
    pub const fn parse(raw: &'static str) -> Self {
        let bytes = raw.as_bytes();
        if !bytes.is_empty() && bytes[bytes.len() - 1] == b'/' {
            JunkPattern::Directory(raw)
        } else {
            JunkPattern::File(raw)
        }
    }

    /// The glob text as written in the catalog.
    pub fn text(&self) -> &'static str {
        match self {
            JunkPattern::Directory(text) | JunkPattern::File(text) => *text,
        }
    }

    pub fn is_directory(&self) -> bool {
        matches!(self, JunkPattern::Directory(_))
    }
}

/// One row of the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    pub family: OsFamily,
    pub pattern: JunkPattern,
}

const fn entry(family: OsFamily, raw: &'static str) -> CatalogEntry {
    CatalogEntry { family, pattern: JunkPattern::parse(raw) }
}

/// Desktop customization metadata. Legitimate at the top of a user folder,
/// junk everywhere else (see the classifier's exclusion rule).
pub const DESKTOP_INI: JunkPattern = JunkPattern::parse("**/Desktop.ini");

/// The fixed, ordered catalog. Order is irrelevant for correctness but keeps
/// listings reproducible between runs.
pub const CATALOG: &[CatalogEntry] = &[
    // Windows
    entry(OsFamily::Windows, "$RECYCLE.BIN/"),
    entry(OsFamily::Windows, "Config.Msi/"),
    entry(OsFamily::Windows, "FOUND.[0-9][0-9][0-9]/"),
    entry(OsFamily::Windows, "System Volume Information/"),
    entry(OsFamily::Windows, "DumpStack.log*"),
    entry(OsFamily::Windows, "**/*.ink"),
    entry(OsFamily::Windows, "**/*.stackdump"),
    entry(OsFamily::Windows, "**/Desktop.ini"),
    entry(OsFamily::Windows, "**/Thumbs.db"),
    entry(OsFamily::Windows, "**/Thumbs.db:encryptable"),
    entry(OsFamily::Windows, "**/ehthumbs.db"),
    entry(OsFamily::Windows, "**/ehthumbs_vista.db"),
    // macOS
    entry(OsFamily::MacOs, ".DocumentRevisions-V100/"),
    entry(OsFamily::MacOs, ".Spotlight-V100/"),
    entry(OsFamily::MacOs, ".TemporaryItems/"),
    entry(OsFamily::MacOs, ".Trashes/"),
    entry(OsFamily::MacOs, ".VolumeIcon.icns/"),
    entry(OsFamily::MacOs, ".com.apple.timemachine.donotpresent/"),
    entry(OsFamily::MacOs, ".fseventsd/"),
    entry(OsFamily::MacOs, "**/.AppleDB/"),
    entry(OsFamily::MacOs, "**/.AppleDesktop/"),
    entry(OsFamily::MacOs, "**/.AppleDouble/"),
    entry(OsFamily::MacOs, "**/.DS_Store/"),
    entry(OsFamily::MacOs, "**/.LSOverride/"),
    entry(OsFamily::MacOs, "**/.apdisk/"),
    entry(OsFamily::MacOs, "**/__MACOSX/"),
    entry(OsFamily::MacOs, "**/*.icloud"),
    entry(OsFamily::MacOs, "**/._*"),
    // Linux
    entry(OsFamily::Linux, "**/.Trash-*/"),
    entry(OsFamily::Linux, "**/*~"),
    entry(OsFamily::Linux, "**/.fuse_hidden*"),
    entry(OsFamily::Linux, "**/.nfs*"),
    // Others
    entry(OsFamily::Other, "@Recently-Snapshot/"),
    entry(OsFamily::Other, "@Recycle/"),
    entry(OsFamily::Other, "**/*.tmp"),
    entry(OsFamily::Other, "**/~$*"),
];

/// Iterates over the catalog patterns in catalog order.
pub fn patterns() -> impl Iterator<Item = JunkPattern> {
    CATALOG.iter().map(|entry| entry.pattern)
}

/// Looks up the family a pattern belongs to.
pub fn family_of(pattern: JunkPattern) -> Option<OsFamily> {
    CATALOG.iter().find(|entry| entry.pattern == pattern).map(|entry| entry.family)
}
