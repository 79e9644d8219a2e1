use std::fmt::Display;

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum ListErr {
    /// `index` is not a valid position in a structure holding `len` nodes.
    IndexOutOfRange { index: usize, len: usize },
}

impl std::error::Error for ListErr {}

impl Display for ListErr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ListErr::IndexOutOfRange { index, len } => {
                write!(f, "index {} out of range for length {}", index, len)
            }
        }
    }
}

impl Into<String> for ListErr {
    fn into(self) -> String {
        self.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = ListErr::IndexOutOfRange { index: 3, len: 2 };
        assert_eq!(err.to_string(), "index 3 out of range for length 2");
        let s: String = err.into();
        assert_eq!(s, "index 3 out of range for length 2");
    }
}
