use crate::core::errors::{CipherError, Result};
use crate::core::models::cipher_spec::CipherKind;
use crate::core::traits::cipher::Cipher;

const NAME: &str = "Rail Fence";

/// Zig-zag transposition over `rails` horizontal tracks.
///
/// Pure transposition: the characters of the input come out unchanged,
/// only their order differs. Any character is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RailFence {
    rails: usize,
}

impl RailFence {
    /// Build a rail fence with `rails` tracks. Fewer than two is rejected.
    pub fn new(rails: usize) -> Result<Self> {
        if rails < 2 {
            return Err(CipherError::invalid_key(
                NAME,
                format!("rails must be at least 2, got {rails}"),
            ));
        }
        Ok(Self { rails })
    }

    pub fn rails(&self) -> usize {
        self.rails
    }

    /// Track visited at each position of a zig-zag walk of `len` steps.
    ///
    /// The walk starts on track 0 going down and reverses on the first
    /// and last track.
    fn walk(&self, len: usize) -> Vec<usize> {
        let mut tracks = Vec::with_capacity(len);
        let mut row = 0usize;
        let mut down = true;
        for _ in 0..len {
            tracks.push(row);
            if row == 0 {
                down = true;
            } else if row == self.rails - 1 {
                down = false;
            }
            if down {
                row += 1;
            } else {
                row -= 1;
            }
        }
        tracks
    }

    /// Tracks a walk of `len` steps can reach. With more rails than
    /// characters the walk never turns, so only the first `len` are used.
    fn tracks_used(&self, len: usize) -> usize {
        self.rails.min(len).max(1)
    }

    fn require_text(text: &str) -> Result<Vec<char>> {
        if text.is_empty() {
            return Err(CipherError::invalid_input(NAME, "text must not be empty"));
        }
        Ok(text.chars().collect())
    }
}

impl Cipher for RailFence {
    fn encode(&self, text: &str) -> Result<String> {
        let chars = Self::require_text(text)?;
        let mut tracks: Vec<String> = vec![String::new(); self.tracks_used(chars.len())];
        for (c, track) in chars.iter().zip(self.walk(chars.len())) {
            tracks[track].push(*c);
        }
        Ok(tracks.concat())
    }

    fn decode(&self, text: &str) -> Result<String> {
        let chars = Self::require_text(text)?;
        let walk = self.walk(chars.len());
        let used = self.tracks_used(chars.len());

        // First pass: how many characters each track holds.
        let mut counts = vec![0usize; used];
        for &track in &walk {
            counts[track] += 1;
        }

        // Second pass: the ciphertext is the tracks laid end to end.
        let mut tracks: Vec<&[char]> = Vec::with_capacity(used);
        let mut start = 0;
        for count in counts {
            tracks.push(&chars[start..start + count]);
            start += count;
        }

        // Third pass: replay the walk, pulling the next character per track.
        let mut cursors = vec![0usize; used];
        let plain = walk
            .into_iter()
            .map(|track| {
                let c = tracks[track][cursors[track]];
                cursors[track] += 1;
                c
            })
            .collect();
        Ok(plain)
    }

    fn kind(&self) -> CipherKind {
        CipherKind::RailFence
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLAIN: &str = "WEAREDISCOVEREDFLEEATONCE";
    const CIPHER: &str = "WECRLTEERDSOEEFEAOCAIVDEN";

    #[test]
    fn encode_three_rails() {
        let fence = RailFence::new(3).unwrap();
        assert_eq!(fence.encode(PLAIN).unwrap(), CIPHER);
    }

    #[test]
    fn decode_three_rails() {
        let fence = RailFence::new(3).unwrap();
        assert_eq!(fence.decode(CIPHER).unwrap(), PLAIN);
    }

    #[test]
    fn two_rails_alternates() {
        let fence = RailFence::new(2).unwrap();
        assert_eq!(fence.encode("ABCDEF").unwrap(), "ACEBDF");
        assert_eq!(fence.decode("ACEBDF").unwrap(), "ABCDEF");
    }

    #[test]
    fn rails_equal_to_length_is_identity() {
        let fence = RailFence::new(5).unwrap();
        assert_eq!(fence.encode("HELLO").unwrap(), "HELLO");
        assert_eq!(fence.decode("HELLO").unwrap(), "HELLO");
    }

    #[test]
    fn rails_longer_than_text_round_trips() {
        let fence = RailFence::new(10).unwrap();
        let encoded = fence.encode("ABC").unwrap();
        assert_eq!(fence.decode(&encoded).unwrap(), "ABC");
    }

    #[test]
    fn huge_rail_count_only_allocates_used_tracks() {
        let fence = RailFence::new(1 << 40).unwrap();
        let encoded = fence.encode("ABC").unwrap();
        assert_eq!(encoded, "ABC");
        assert_eq!(fence.decode(&encoded).unwrap(), "ABC");

        let fence = RailFence::new(usize::MAX).unwrap();
        assert_eq!(fence.decode("HELLO").unwrap(), "HELLO");
    }

    #[test]
    fn tracks_used_is_capped_by_length() {
        let fence = RailFence::new(4).unwrap();
        assert_eq!(fence.tracks_used(2), 2);
        assert_eq!(fence.tracks_used(10), 4);
    }

    #[test]
    fn single_character() {
        let fence = RailFence::new(4).unwrap();
        assert_eq!(fence.encode("Q").unwrap(), "Q");
        assert_eq!(fence.decode("Q").unwrap(), "Q");
    }

    #[test]
    fn walk_bounces_between_first_and_last_track() {
        let fence = RailFence::new(3).unwrap();
        assert_eq!(fence.walk(7), vec![0, 1, 2, 1, 0, 1, 2]);
    }

    #[test]
    fn fewer_than_two_rails_rejected() {
        assert!(matches!(
            RailFence::new(1),
            Err(CipherError::InvalidKey { .. })
        ));
        assert!(matches!(
            RailFence::new(0),
            Err(CipherError::InvalidKey { .. })
        ));
    }

    #[test]
    fn empty_text_rejected() {
        let fence = RailFence::new(3).unwrap();
        assert!(matches!(
            fence.encode(""),
            Err(CipherError::InvalidInput { .. })
        ));
        assert!(matches!(
            fence.decode(""),
            Err(CipherError::InvalidInput { .. })
        ));
    }
}
