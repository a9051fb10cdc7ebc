//! Typed domain separators for canonical hashing.
//!
//! Every digest computed in the workspace selects a domain via [`HashDomain`].
//! Adding a domain is a single line in the macro invocation below; the enum,
//! `as_bytes()`, `ALL`, and `Display` are generated from it.

macro_rules! define_hash_domains {
    (
        $(
            $(#[$meta:meta])*
            $variant:ident => $bytes:expr
        ),+ $(,)?
    ) => {
        /// Typed domain separator for [`super::hash::canonical_hash`].
        ///
        /// Every variant maps to a unique, null-terminated byte string used as
        /// a SHA-256 prefix.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum HashDomain {
            $(
                $(#[$meta])*
                $variant,
            )+
        }

        impl HashDomain {
            /// The raw domain-separator bytes (null-terminated).
            #[must_use]
            pub const fn as_bytes(&self) -> &'static [u8] {
                match self {
                    $( Self::$variant => $bytes, )+
                }
            }

            /// All domain variants in declaration order.
            pub const ALL: &[HashDomain] = &[
                $( Self::$variant, )+
            ];
        }

        impl core::fmt::Display for HashDomain {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                match self {
                    $( Self::$variant => write!(f, stringify!($variant)), )+
                }
            }
        }
    };
}

define_hash_domains! {
    /// Probe trace (outcome + ordered steps) hashing.
    ProbeTrace => b"BISECT::PROBE_TRACE::V1\0",

    /// Full trace report (inputs + trace + trace digest) hashing.
    TraceReport => b"BISECT::TRACE_REPORT::V1\0",

    /// Generated sample sequence hashing.
    SampleSequence => b"BISECT::SAMPLE_SEQUENCE::V1\0",
}
