//! Suffix array over a byte buffer
//!
//! Built by prefix doubling: suffixes are sorted by their first `2^k` bytes,
//! with ranks from the previous round as sort keys, until every rank is
//! distinct. Occurrences of a pattern form a contiguous range of the array,
//! found with two binary searches.

/// Sorted start offsets of every suffix of a buffer
#[derive(Debug, Clone, Default)]
pub struct SuffixArray {
    suffixes: Vec<usize>,
}

impl SuffixArray {
    #[must_use]
    pub fn new(text: &[u8]) -> Self {
        let n = text.len();
        let mut suffixes: Vec<usize> = (0..n).collect();
        if n < 2 {
            return Self { suffixes };
        }

        // rank 0 marks "past the end" and sorts before every byte
        let mut rank: Vec<usize> = text.iter().map(|&b| usize::from(b) + 1).collect();
        rank.resize(2 * n, 0);
        let mut next = vec![0; 2 * n];
        let mut width = 1;

        loop {
            debug_assert!(width < n);
            let key = |i: usize| (rank[i], rank[i + width]);
            suffixes.sort_unstable_by_key(|&i| key(i));

            next[suffixes[0]] = 1;
            for k in 1..n {
                next[suffixes[k]] =
                    next[suffixes[k - 1]] + usize::from(key(suffixes[k]) != key(suffixes[k - 1]));
            }
            std::mem::swap(&mut rank, &mut next);

            if rank[suffixes[n - 1]] == n {
                break;
            }
            width <<= 1;
        }

        Self { suffixes }
    }

    /// Sorted start offsets of every occurrence of `pattern` in `text`
    ///
    /// `text` must be the buffer the array was built from. An empty pattern
    /// has no occurrences.
    #[must_use]
    pub fn occurrences(&self, text: &[u8], pattern: &[u8]) -> Vec<usize> {
        let mut positions = self.matching(text, pattern).to_vec();
        positions.sort_unstable();
        positions
    }

    /// Start offsets of every occurrence of `pattern`, in suffix order
    ///
    /// The slice is the contiguous range of the array whose suffixes start
    /// with `pattern`, so its entries are ordered by the text that follows.
    #[must_use]
    pub fn matching(&self, text: &[u8], pattern: &[u8]) -> &[usize] {
        if pattern.is_empty() {
            return &[];
        }
        let lo = self.suffixes.partition_point(|&i| &text[i..] < pattern);
        let hi = lo + self.suffixes[lo..].partition_point(|&i| text[i..].starts_with(pattern));
        &self.suffixes[lo..hi]
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.suffixes.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.suffixes.is_empty()
    }

    /// The suffix start offsets in sorted suffix order
    #[must_use]
    pub fn as_slice(&self) -> &[usize] {
        &self.suffixes
    }
}
