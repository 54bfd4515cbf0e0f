use std::path::{Path, PathBuf};

use gdal::errors::GdalError;
use gdal::vector::LayerAccess;
use gdal::{Dataset, DatasetOptions, GdalOpenFlags};
use thiserror::Error;
use tracing::debug;

/// GDAL driver used to open candidate files
pub const SHAPEFILE_DRIVER: &str = "ESRI Shapefile";

/// Errors encountered when extracting a CRS from a vector file
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Failed to load shapefile {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: GdalError,
    },
    #[error("No CRS found for: {}", .path.display())]
    NoCrs { path: PathBuf },
}

impl ExtractError {
    pub fn path(&self) -> &Path {
        match self {
            ExtractError::Open { path, .. } | ExtractError::NoCrs { path } => path,
        }
    }

    fn open(path: &Path) -> impl FnOnce(GdalError) -> Self + '_ {
        move |source| ExtractError::Open {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// CRS exactly as declared by the data source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclaredCrs {
    pub name: String,
    pub wkt: String,
}

fn open_vector(path: &Path) -> Result<Dataset, GdalError> {
    Dataset::open_ex(
        path,
        DatasetOptions {
            open_flags: GdalOpenFlags::GDAL_OF_VECTOR | GdalOpenFlags::GDAL_OF_READONLY,
            allowed_drivers: Some(&[SHAPEFILE_DRIVER]),
            ..Default::default()
        },
    )
}

/// Open `path` as a shapefile and return the CRS of its layer.
///
/// The dataset is closed before this function returns, on every path.
pub fn read_declared_crs(path: &Path) -> Result<DeclaredCrs, ExtractError> {
    let dataset = open_vector(path).map_err(ExtractError::open(path))?;
    let layer = dataset.layer(0).map_err(ExtractError::open(path))?;

    let srs = layer.spatial_ref().ok_or_else(|| ExtractError::NoCrs {
        path: path.to_path_buf(),
    })?;
    let wkt = srs.to_wkt().map_err(ExtractError::open(path))?;
    if wkt.is_empty() {
        return Err(ExtractError::NoCrs {
            path: path.to_path_buf(),
        });
    }

    let name = srs.name().unwrap_or_default();
    debug!("Read CRS {:?} from {:?}", name, path);

    Ok(DeclaredCrs { name, wkt })
}
