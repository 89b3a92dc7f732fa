//! The fixed course catalog.
//!
//! The catalog is built once at startup and never changes. Its order is the
//! display order, and a course's position doubles as its [`CourseId`].

mod course;

pub use course::{Course, CourseId, NO_PREREQUISITES};

use std::collections::HashSet;

const STANDARD_COURSES: [Course; 5] = [
    Course {
        title: "Mobile Application Development",
        code: "SECT-3113",
        credit_hours: 3,
        description: "Teaches how to design and develop mobile apps for Android or iOS. Focuses on UI/UX, app lifecycle, and backend integration.",
        prerequisites: "Web Design and Programming",
    },
    Course {
        title: "Computer Graphics",
        code: "SECT-3132",
        credit_hours: 3,
        description: "This course covers techniques for generating and manipulating visual content.You'll learn about rendering, modeling, and animation using graphics algorithms.",
        prerequisites: "Fundamentals of Electrical Circuit and Electronics",
    },
    Course {
        title: "Fundamentals of AI",
        code: "SECT-3151",
        credit_hours: 2,
        description: " Introduces core AI concepts like search algorithms, machine learning, and reasoning.Focuses on how machines can mimic intelligent human behavior.",
        prerequisites: "Fundamentals of Software Engineering",
    },
    Course {
        title: "Fundamentals of Cybersecurity",
        code: "SECT-3141",
        credit_hours: 2,
        description: "Covers basic principles for protecting systems, networks, and data.Includes cryptography, threat detection, and secure system design.",
        prerequisites: NO_PREREQUISITES,
    },
    Course {
        title: "Operating Systems and System Programming",
        code: "SECT-3082",
        credit_hours: 3,
        description: " Explains how operating systems manage hardware and software resources.Includes process control, memory management, and low-level programming.",
        prerequisites: "Computer Organization and Architecture",
    },
];

/// Anything that can name a course: a [`CourseId`], a raw index or a code.
pub trait CourseRef: std::fmt::Debug {
    /// Resolve against `catalog`, `None` if no such course exists.
    fn resolve(&self, catalog: &Catalog) -> Option<CourseId>;
}

impl CourseRef for CourseId {
    fn resolve(&self, catalog: &Catalog) -> Option<CourseId> {
        (self.0 < catalog.len()).then_some(*self)
    }
}

impl CourseRef for usize {
    fn resolve(&self, catalog: &Catalog) -> Option<CourseId> {
        CourseId(*self).resolve(catalog)
    }
}

impl CourseRef for &str {
    fn resolve(&self, catalog: &Catalog) -> Option<CourseId> {
        catalog.find(self)
    }
}

impl CourseRef for String {
    fn resolve(&self, catalog: &Catalog) -> Option<CourseId> {
        catalog.find(self)
    }
}

/// Ordered, immutable course list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Catalog {
    courses: Vec<Course>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}

impl Catalog {
    /// The built-in five-course catalog.
    pub fn standard() -> Self {
        Self::from_courses(STANDARD_COURSES.to_vec())
    }

    /// Build a catalog from hard-coded data.
    ///
    /// # Panics
    ///
    /// On a duplicate code or a course with zero credit hours. Catalog data
    /// is compiled in, so either is a programming error.
    pub fn from_courses(courses: Vec<Course>) -> Self {
        let mut seen = HashSet::new();
        for course in &courses {
            assert!(
                seen.insert(course.code),
                "duplicate course code {}",
                course.code
            );
            assert!(
                course.credit_hours > 0,
                "course {} has no credit hours",
                course.code
            );
        }
        Self { courses }
    }

    /// Every course in display order.
    pub fn list(&self) -> &[Course] {
        &self.courses
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    pub fn get(&self, id: CourseId) -> Option<&Course> {
        self.courses.get(id.0)
    }

    /// Look a course up by its code.
    pub fn find(&self, code: &str) -> Option<CourseId> {
        self.courses
            .iter()
            .position(|c| c.code == code)
            .map(CourseId)
    }

    pub fn ids(&self) -> impl Iterator<Item = CourseId> + '_ {
        (0..self.courses.len()).map(CourseId)
    }

    pub fn resolve<R: CourseRef + ?Sized>(&self, course: &R) -> Option<CourseId> {
        course.resolve(self)
    }

    /// Iterate `(id, course)` pairs in display order.
    pub fn entries(&self) -> impl Iterator<Item = (CourseId, &Course)> + '_ {
        self.courses
            .iter()
            .enumerate()
            .map(|(i, c)| (CourseId(i), c))
    }
}
