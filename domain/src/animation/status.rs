//! Rotating progress messages

/// Messages cycled while a video is generated
pub const STATUS_MESSAGES: [&str; 4] = [
    "Fadel sedang membawa gambarmu ke dunia animasi...",
    "Merender setiap piksel menjadi gerakan...",
    "Sedikit lagi, keajaiban sedang dibuat!",
    "Hampir selesai, videomu sedang dipoles...",
];

/// Cursor over [`STATUS_MESSAGES`] that wraps around
#[derive(Debug, Clone, Default)]
pub struct StatusRotation {
    index: usize,
}

impl StatusRotation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> &'static str {
        STATUS_MESSAGES[self.index]
    }

    /// Move to the next message and return it.
    pub fn advance(&mut self) -> &'static str {
        self.index = (self.index + 1) % STATUS_MESSAGES.len();
        self.current()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation_wraps() {
        let mut rotation = StatusRotation::new();
        assert_eq!(rotation.current(), STATUS_MESSAGES[0]);
        for expected in [1, 2, 3, 0, 1] {
            assert_eq!(rotation.advance(), STATUS_MESSAGES[expected]);
        }
        assert_eq!(rotation.current(), STATUS_MESSAGES[1]);
    }
}
