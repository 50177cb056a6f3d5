//! Numeric codes used by the FIFF format

/// Version written into generated identifiers (1.3)
pub const FIFF_VERSION: i32 = (1 << 16) | 3;

/// Block kind of the implicit file level block
pub const ROOT_BLOCK: i32 = 0;

/// Deepest block nesting accepted when reading or writing a file
pub const MAX_DEPTH: usize = 256;

/// Tag kinds the engine needs to recognise
pub mod kind {
    pub const FILE_ID: i32 = 100;
    pub const DIR_POINTER: i32 = 101;
    pub const DIR: i32 = 102;
    pub const BLOCK_ID: i32 = 103;
    pub const BLOCK_START: i32 = 104;
    pub const BLOCK_END: i32 = 105;
    pub const FREE_LIST: i32 = 106;
    pub const FREE_BLOCK: i32 = 107;
    pub const NOP: i32 = 108;
    pub const PARENT_FILE_ID: i32 = 109;
    pub const PARENT_BLOCK_ID: i32 = 110;
}

/// Tag data types
pub mod types {
    pub const VOID: u32 = 0;
    pub const BYTE: u32 = 1;
    pub const SHORT: u32 = 2;
    pub const INT: u32 = 3;
    pub const FLOAT: u32 = 4;
    pub const DOUBLE: u32 = 5;
    pub const STRING: u32 = 10;
    pub const ID_STRUCT: u32 = 31;
    pub const DIR_ENTRY_STRUCT: u32 = 32;
}

/// Special values of the `next` field of a tag header
pub mod next {
    /// The next tag follows this one directly
    pub const SEQ: i32 = 0;
    /// This is the last tag of the file
    pub const NONE: i32 = -1;
}

/// Well known block kinds
pub mod block {
    pub const MEAS: i32 = 100;
    pub const MEAS_INFO: i32 = 101;
    pub const RAW_DATA: i32 = 102;
    pub const PROCESSED_DATA: i32 = 103;
    pub const EVOKED: i32 = 104;
    pub const ASPECT: i32 = 105;
    pub const SUBJECT: i32 = 106;
    pub const ISOTRAK: i32 = 107;
    pub const HPI_MEAS: i32 = 108;
    pub const HPI_RESULT: i32 = 109;
    pub const HPI_COIL: i32 = 110;
    pub const PROJECT: i32 = 111;
    pub const CONTINUOUS_DATA: i32 = 112;
    pub const VOID: i32 = 114;
    pub const EVENTS: i32 = 115;
    pub const INDEX: i32 = 116;
    pub const DACQ_PARS: i32 = 117;
    pub const REF: i32 = 118;
    pub const PROJ: i32 = 313;
    pub const PROJ_ITEM: i32 = 314;

    /// Human readable name of a block kind, if it is a well known one
    pub fn name(kind: i32) -> Option<&'static str> {
        Some(match kind {
            super::ROOT_BLOCK => "root",
            MEAS => "measurement",
            MEAS_INFO => "measurement info",
            RAW_DATA => "raw data",
            PROCESSED_DATA => "processed data",
            EVOKED => "evoked",
            ASPECT => "aspect",
            SUBJECT => "subject",
            ISOTRAK => "isotrak",
            HPI_MEAS => "hpi measurement",
            HPI_RESULT => "hpi result",
            HPI_COIL => "hpi coil",
            PROJECT => "project",
            CONTINUOUS_DATA => "continuous data",
            VOID => "void",
            EVENTS => "events",
            INDEX => "index",
            DACQ_PARS => "acquisition parameters",
            REF => "reference",
            PROJ => "projection",
            PROJ_ITEM => "projection item",
            _ => return None,
        })
    }
}
