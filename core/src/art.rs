use alloc::vec::Vec;

/// The ASCII art source, one entry per text line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArtGrid {
    lines: Vec<Vec<char>>,
}

impl ArtGrid {
    pub fn parse(text: &str) -> Self {
        let lines = text.lines().map(|line| line.chars().collect()).collect();
        Self { lines }
    }

    pub fn height(&self) -> usize {
        self.lines.len()
    }

    /// Width of the shortest line, the widest window every line can supply.
    pub fn min_width(&self) -> usize {
        self.lines.iter().map(Vec::len).min().unwrap_or(0)
    }

    pub fn get(&self, x: usize, y: usize) -> Option<char> {
        self.lines.get(y)?.get(x).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensions() {
        let art = ArtGrid::parse("abcd\nab\nabc\n");
        assert_eq!(art.height(), 3);
        assert_eq!(art.min_width(), 2);
        assert_eq!(art.get(3, 0), Some('d'));
        assert_eq!(art.get(2, 1), None);
        assert_eq!(art.get(0, 3), None);
    }

    #[test]
    fn test_line_endings() {
        let art = ArtGrid::parse("ab\r\ncd");
        assert_eq!(art.height(), 2);
        assert_eq!(art.min_width(), 2);
        assert_eq!(art.get(1, 1), Some('d'));
    }

    #[test]
    fn test_empty() {
        let art = ArtGrid::parse("");
        assert_eq!(art.height(), 0);
        assert_eq!(art.min_width(), 0);
    }

    #[test]
    fn test_blank_line_limits_width() {
        let art = ArtGrid::parse("........\n\n........\n");
        assert_eq!(art.height(), 3);
        assert_eq!(art.min_width(), 0);
    }
}
