use crate::answer::Answer;

/// One day's puzzle solution.
///
/// Each part takes the raw puzzle text and returns `None` while the part
/// is not solved yet.
pub trait Solution {
    fn part1(&self, input: &str) -> Option<Answer>;

    fn part2(&self, input: &str) -> Option<Answer>;

    /// Run part 1 (`part == 1`) or part 2 (anything else).
    fn part(&self, part: u8, input: &str) -> Option<Answer> {
        if part == 1 {
            self.part1(input)
        } else {
            self.part2(input)
        }
    }
}

/// Signature of a free `partN` function.
pub type PartFn = fn(&str) -> Option<Answer>;

/// A [`Solution`] made of two free functions, the usual shape of a day
/// module.
#[derive(Clone, Copy)]
pub struct Parts {
    pub part1: PartFn,
    pub part2: PartFn,
}

impl Parts {
    pub const fn new(part1: PartFn, part2: PartFn) -> Self {
        Self { part1, part2 }
    }
}

impl Solution for Parts {
    fn part1(&self, input: &str) -> Option<Answer> {
        (self.part1)(input)
    }

    fn part2(&self, input: &str) -> Option<Answer> {
        (self.part2)(input)
    }
}

/// The scaffold a new day starts from: neither part solved.
pub fn unsolved(_input: &str) -> Option<Answer> {
    None
}
