use std::fmt::{self, Display, Formatter};

#[derive(Debug, Eq, PartialEq, Clone, Copy)]
pub struct Report {
    line_number: usize,
    before: usize,
    after: usize,
}

impl Report {
    pub fn new(line_number: usize, before: usize, after: usize) -> Report {
        Report {
            line_number,
            before,
            after,
        }
    }

    pub fn line_number(&self) -> usize {
        self.line_number
    }

    pub fn before(&self) -> usize {
        self.before
    }

    pub fn after(&self) -> usize {
        self.after
    }

    pub fn is_removed(&self) -> bool {
        self.after < self.before
    }
}

impl Display for Report {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        write!(
            formatter,
            "Removed line {}. Total lines before: {}, after: {}",
            self.line_number, self.before, self.after
        )
    }
}
