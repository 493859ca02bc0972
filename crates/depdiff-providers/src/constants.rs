//! Provider Constants

// ============================================================================
// NAME MATCHING CONSTANTS
// ============================================================================

/// Separators between path or namespace segments
pub const PATH_SEPARATORS: [char; 3] = ['/', '\\', '.'];

/// Separator between qualified name segments
pub const QUALIFIED_NAME_SEPARATOR: char = '.';

/// Opens a generic argument list
pub const GENERIC_OPEN: char = '<';

/// Closes a generic argument list
pub const GENERIC_CLOSE: char = '>';

/// Leading characters of Sourcetrail package names absent from other tools
pub const SOURCETRAIL_PACKAGE_PREFIX_LEN: usize = 1;

// ============================================================================
// FORMAT ADAPTER CONSTANTS
// ============================================================================

/// Suffix of Depends entity class names (`FunctionEntity` -> `Function`)
pub const DEPENDS_ENTITY_SUFFIX: &str = "Entity";

/// Separator of Depends entity dump fields (`id/name/class`)
pub const DEPENDS_FIELD_SEPARATOR: char = '/';

/// Serialization markers stripped from Sourcetrail names, applied in order
pub const SOURCETRAIL_NAME_MARKERS: [(&str, &str); 8] = [
    ("\ts\tp", ""),
    ("/\tm", ""),
    ("::\tm.:main:.", ""),
    ("::    m", ""),
    ("\tn", "."),
    ("\tm", ""),
    ("\ts", ""),
    ("\tp", ""),
];
