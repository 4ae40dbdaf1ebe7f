//! Sources of point sets for the driver.

use std::{fs::File, io::BufReader, path::Path};

use rand::Rng;
use tracing::debug;

use crate::{error::Error, point::Point};

/// Generate `n` points with coordinates uniformly distributed in `[0, 1)`.
pub fn random_points<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Vec<Point> {
    (0..n).map(|_| Point::new(rng.gen(), rng.gen())).collect()
}

/// Read a JSON array of `{"x": .., "y": ..}` objects.
pub fn load_points(path: &Path) -> Result<Vec<Point>, Error> {
    let reader = BufReader::new(File::open(path)?);
    let points: Vec<Point> = serde_json::from_reader(reader)?;
    debug!(path = %path.display(), n = points.len(), "loaded points");
    Ok(points)
}
