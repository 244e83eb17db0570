//! Benchmark profiles for the gridwalk traversal framework.
//!
//! Provides pre-built [`RankConfig`] profiles:
//!
//! - [`reference_profile`]: one rank of a 128³ run on 8 ranks
//! - [`stress_profile`]: one rank of a 256³ run on 16 ranks

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use gridwalk_core::Exclusion;
use gridwalk_traverse::{PhysicalExtents, RankConfig, SpectralExtents};

/// Extents for `rank` of an `n`³ run split across `ranks` ranks.
///
/// Spectral x and physical z are split evenly. The padded physical grid
/// uses the 3/2 rule. The z Nyquist index is excluded on every rank; the
/// x Nyquist index only on the last rank, where the top x mode lives.
/// `n` must be divisible by `2 * ranks`.
pub fn rank_profile(n: i32, ranks: i32, rank: i32) -> RankConfig {
    let nx_perproc = n / 2 / ranks;
    let padded = n * 3 / 2;
    RankConfig {
        rank: rank as u32,
        spectral: SpectralExtents {
            nz: n,
            ny_half: n / 2 + 1,
            nx_perproc,
            iz_max: Exclusion::At(n / 2 + 1),
            ix_max: if rank == ranks - 1 {
                Exclusion::At(nx_perproc)
            } else {
                Exclusion::None
            },
        },
        physical: PhysicalExtents {
            nx: padded,
            nz_perproc: padded / ranks,
            ny: padded,
        },
        physical0: PhysicalExtents {
            nx: n,
            nz_perproc: n / ranks,
            ny: n,
        },
    }
}

/// Last rank of a 128³ run on 8 ranks (~885K padded physical cells).
pub fn reference_profile() -> RankConfig {
    rank_profile(128, 8, 7)
}

/// Last rank of a 256³ run on 16 ranks (~3.5M padded physical cells).
pub fn stress_profile() -> RankConfig {
    rank_profile(256, 16, 15)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridwalk_traverse::Traversal;

    #[test]
    fn profiles_build() {
        let grids = reference_profile().build().unwrap();
        assert_eq!(grids.physical.visit_count(), 192 * 24 * 192);
        assert_eq!(grids.spectral.visit_count(), 127 * 65 * 7);
        assert!(stress_profile().build().is_ok());
    }

    #[test]
    fn only_last_rank_drops_x_nyquist() {
        let first = rank_profile(64, 4, 0).build().unwrap();
        let last = rank_profile(64, 4, 3).build().unwrap();
        assert_eq!(first.spectral.ix_max(), Exclusion::None);
        assert_eq!(last.spectral.ix_max(), Exclusion::At(8));
    }
}
