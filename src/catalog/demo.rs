//! Built-in demonstration catalog.

use super::{Annotation, Track, TrackCatalog};

/// The demo timeline used when no catalog file is configured.
///
/// Five tracks, two of them empty:
/// `[2-3, 3-4]`, `[5-8, 9-10]`, `[]`, `[12-14, 17-19]`, `[]`.
pub fn demo() -> TrackCatalog {
    let track = |pairs: &[(f64, f64)]| {
        Track::new(
            pairs
                .iter()
                .map(|&(start, end)| Annotation::new(start, end))
                .collect(),
        )
    };

    TrackCatalog::new(vec![
        track(&[(2.0, 3.0), (3.0, 4.0)]),
        track(&[(5.0, 8.0), (9.0, 10.0)]),
        Track::default(),
        track(&[(12.0, 14.0), (17.0, 19.0)]),
        Track::default(),
    ])
}
