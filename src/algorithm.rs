use std::cmp::Ordering;
use std::error::Error;
use std::fmt;
use std::str::FromStr;

macro_rules! algorithms {
    ($([$kind:ident, $module:ident, quadratic: $quadratic:literal]),* $(,)?) => {
        paste::paste! {
            /// Runtime selection of one of the sorts, for callers that pick the algorithm from
            /// input, such as the demo binary or the benchmarks.
            #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
            pub enum Algorithm {
                $([<$module:camel>],)*
            }

            impl Algorithm {
                pub const ALL: &'static [Algorithm] = &[$(Algorithm::[<$module:camel>],)*];

                pub fn name(self) -> &'static str {
                    match self {
                        $(Algorithm::[<$module:camel>] => stringify!($module),)*
                    }
                }

                /// Equal elements keep their relative order.
                pub fn is_stable(self) -> bool {
                    match self {
                        $(Algorithm::[<$module:camel>] => stringify!($kind) == "stable",)*
                    }
                }

                /// Average case O(n²).
                pub fn is_quadratic(self) -> bool {
                    match self {
                        $(Algorithm::[<$module:camel>] => $quadratic,)*
                    }
                }

                pub fn sort_by_less<T, F>(self, v: &mut [T], mut is_less: F)
                where
                    F: FnMut(&T, &T) -> bool,
                {
                    match self {
                        $(Algorithm::[<$module:camel>] => crate::$kind::$module::$module(v, &mut is_less),)*
                    }
                }
            }
        }
    };
}

algorithms!(
    [unstable, quicksort, quadratic: false],
    [stable, merge_sort, quadratic: false],
    [stable, insertion_sort, quadratic: true],
    [stable, bubble_sort, quadratic: true],
    [unstable, heapsort, quadratic: false],
);

impl Algorithm {
    #[inline]
    pub fn sort<T>(self, v: &mut [T])
    where
        T: Ord,
    {
        self.sort_by_less(v, |a, b| a.lt(b));
    }

    #[inline]
    pub fn sort_by<T, F>(self, v: &mut [T], mut compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.sort_by_less(v, |a, b| compare(a, b) == Ordering::Less);
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    /// Accepts the name in any case, with `_`, `-` or nothing between the words, so `merge_sort`,
    /// `Merge-Sort` and `mergesort` all select merge sort.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = normalize(s);

        Algorithm::ALL
            .iter()
            .copied()
            .find(|algorithm| normalize(algorithm.name()) == normalized)
            .ok_or_else(|| ParseAlgorithmError {
                input: s.to_owned(),
            })
    }
}

fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, '_' | '-' | ' '))
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseAlgorithmError {
    input: String,
}

impl ParseAlgorithmError {
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl fmt::Display for ParseAlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown sort algorithm '{}', expected one of:", self.input)?;
        for algorithm in Algorithm::ALL {
            write!(f, " {algorithm}")?;
        }

        Ok(())
    }
}

impl Error for ParseAlgorithmError {}
