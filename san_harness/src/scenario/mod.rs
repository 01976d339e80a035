//! # scenario
//! The closed registry of defect triggers. Every variant except
//! [`Scenario::Skip`] commits exactly one class of memory, undefined-behavior
//! or concurrency defect when triggered, so the matching checker has
//! something to report.
mod asan;
mod msan;
mod tsan;
mod ubsan;

use anyhow::Result;
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::sanitizer::Sanitizer;

#[derive(Debug, Display, EnumString, EnumIter, IntoStaticStr, Clone, Copy, PartialEq, Eq)]
pub enum Scenario {
    #[strum(serialize = "san_test_skip")]
    Skip,
    #[strum(serialize = "asan_test_use_after_free")]
    UseAfterFree,
    #[strum(serialize = "asan_test_use_after_free_scalar")]
    UseAfterFreeScalar,
    #[strum(serialize = "asan_test_array_bounds")]
    ArrayBounds,
    #[strum(serialize = "asan_test_double_free")]
    DoubleFree,
    #[strum(serialize = "ubsan_test_signed_overflow")]
    SignedOverflow,
    #[strum(serialize = "ubsan_test_zero_div")]
    ZeroDiv,
    #[strum(serialize = "ubsan_test_nullptr_access")]
    NullptrAccess,
    #[strum(serialize = "tsan_test_race")]
    Race,
    #[strum(serialize = "msan_test_corruption")]
    Corruption,
}

impl Scenario {
    /// Registry key, as read from `TEST_SANITIZER`.
    #[must_use]
    pub fn key(self) -> &'static str {
        self.into()
    }

    #[must_use]
    pub fn sanitizer(self) -> Sanitizer {
        Sanitizer::of_key(self.key())
    }

    /// What the checker is expected to report.
    #[must_use]
    pub fn defect(self) -> &'static str {
        match self {
            Self::Skip => "none",
            Self::UseAfterFree | Self::UseAfterFreeScalar => "heap-use-after-free",
            Self::ArrayBounds => "stack-buffer-overflow",
            Self::DoubleFree => "double-free",
            Self::SignedOverflow => "signed-integer-overflow",
            Self::ZeroDiv => "integer-divide-by-zero",
            Self::NullptrAccess => "null-pointer-dereference",
            Self::Race => "data-race",
            Self::Corruption => "use-of-uninitialized-value",
        }
    }

    /// Runs the scenario body. `argc` feeds the indices and operands so the
    /// optimizer cannot fold the defect away.
    ///
    /// Only [`Scenario::Skip`] is guaranteed to return. Under the matching
    /// checker the other bodies abort the process before they get here.
    pub fn trigger(self, argc: usize) -> Result<()> {
        info!(
            "Triggering {self}: {} under {} ({})",
            self.defect(),
            self.sanitizer(),
            self.sanitizer().rustc_flag().unwrap_or("no extra flags")
        );

        match self {
            Self::Skip => println!("{self}"),
            Self::UseAfterFree => asan::use_after_free(argc),
            Self::UseAfterFreeScalar => asan::use_after_free_scalar(),
            Self::ArrayBounds => asan::array_bounds(),
            Self::DoubleFree => asan::double_free(),
            Self::SignedOverflow => ubsan::signed_overflow(argc),
            Self::ZeroDiv => ubsan::zero_div(argc),
            Self::NullptrAccess => ubsan::nullptr_access(),
            Self::Race => tsan::race(argc)?,
            Self::Corruption => msan::corruption(argc),
        }

        debug!("{self} returned");
        Ok(())
    }
}
