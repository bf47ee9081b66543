//! Static CSV corpora used across harnesses.
//!
//! Each corpus is a complete dataset file body. Harnesses write them to a
//! temp directory with [`write_dataset`] and load them through the real
//! loader, so header resolution and row parsing are always exercised
//! end-to-end.

use std::path::{Path, PathBuf};

/// A clean file: lower-case headers, five rows, one row without coordinates
/// and one with only a latitude.
pub const CSV_WELL_FORMED: &str = "\
circlename,regionname,divisionname,officename,pincode,officetype,delivery,district,statename,latitude,longitude
Delhi,Delhi,New Delhi Central,New Delhi GPO,110001,HO,Delivery,New Delhi,Delhi,28.6333,77.2167
Delhi,Delhi,New Delhi Central,Sansad Marg HO,110001,HO,Delivery,New Delhi,Delhi,28.6236,77.2085
Tamil Nadu,Chennai City Region,Chennai City North,Chennai GPO,600001,HO,Delivery,Chennai,Tamil Nadu,13.0827,80.2707
Maharashtra,Mumbai,Mumbai GPO,Mumbai GPO,400001,HO,Delivery,Mumbai,Maharashtra,,
West Bengal,North Bengal,Darjeeling,Darjeeling HO,734101,HO,Delivery,Darjeeling,West Bengal,27.0410,
";

/// Same data, headers in vendor-export casing with stray spaces.
pub const CSV_MIXED_CASE_HEADERS: &str = "\
CircleName, RegionName ,DivisionName,OfficeName,Pincode,OfficeType,Delivery,District,StateName,Latitude,Longitude
Delhi,Delhi,New Delhi Central,New Delhi GPO,110001,HO,Delivery,New Delhi,Delhi,28.6333,77.2167
";

/// The `statename` column is absent; loading must fail before any row is
/// parsed.
pub const CSV_MISSING_COLUMN: &str = "\
circlename,regionname,divisionname,officename,pincode,officetype,delivery,district,latitude,longitude
Delhi,Delhi,New Delhi Central,New Delhi GPO,110001,HO,Delivery,New Delhi,28.6333,77.2167
";

/// Two good rows around three bad ones: a textual pincode, an empty
/// pincode, and a row truncated before the pincode column. Coordinate junk
/// (`NA`) on a good row must not cost the row.
pub const CSV_MALFORMED_ROWS: &str = "\
circlename,regionname,divisionname,officename,pincode,officetype,delivery,district,statename,latitude,longitude
Delhi,Delhi,New Delhi Central,New Delhi GPO,110001,HO,Delivery,New Delhi,Delhi,28.6333,77.2167
Delhi,Delhi,New Delhi Central,Broken Row BO,ABC123,BO,Delivery,New Delhi,Delhi,28.63,77.21
Delhi,Delhi,New Delhi Central,Empty Pincode BO,,BO,Delivery,New Delhi,Delhi,28.63,77.21
Delhi,Delhi
Tamil Nadu,Chennai City Region,Chennai City North,Chennai GPO,600001,HO,Delivery,Chennai,Tamil Nadu,NA,80.2707
";

/// Write a corpus to `<dir>/pincodes.csv` and return the path.
pub fn write_dataset(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join("pincodes.csv");
    std::fs::write(&path, contents).expect("write dataset fixture");
    path
}
