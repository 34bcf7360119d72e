#[derive(Clone, Debug)]
pub struct SeedConfig {
    pub students: usize,
    pub teachers: usize,
    pub guardians: usize,
    pub courses: usize,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            students: 50,
            teachers: 10,
            guardians: 40,
            courses: 12,
        }
    }
}

/// Rows inserted by one seeding run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub students: usize,
    pub teachers: usize,
    pub guardians: usize,
    pub courses: usize,
    pub student_guardians: usize,
}

impl SeedSummary {
    pub fn total(&self) -> usize {
        self.students + self.teachers + self.guardians + self.courses + self.student_guardians
    }
}
