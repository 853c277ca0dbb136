//! Test-only record types: a small course catalog with nested records and
//! collections, exercising every field classification.

use crate::{
    model::{FieldKind, FieldModel, RecordModel},
    query::ops::CompareOp,
    record_impl,
};
use chrono::{DateTime, TimeZone, Utc};

pub(crate) static LESSON_MODEL: RecordModel = RecordModel {
    path: "dynq_core::test_fixtures::Lesson",
    record_name: "lesson",
    primary_key: "Id",
    fields: &[
        FieldModel {
            name: "Id",
            kind: FieldKind::Uint,
            quick_search: Some(CompareOp::Eq),
        },
        FieldModel {
            name: "Title",
            kind: FieldKind::Text,
            quick_search: None,
        },
        FieldModel {
            name: "DurationSecs",
            kind: FieldKind::Uint,
            quick_search: None,
        },
    ],
};

pub(crate) static MODULE_MODEL: RecordModel = RecordModel {
    path: "dynq_core::test_fixtures::Module",
    record_name: "module",
    primary_key: "Id",
    fields: &[
        FieldModel {
            name: "Id",
            kind: FieldKind::Uint,
            quick_search: Some(CompareOp::Eq),
        },
        FieldModel {
            name: "Title",
            kind: FieldKind::Text,
            quick_search: None,
        },
        FieldModel {
            name: "Lessons",
            kind: FieldKind::List(&LESSON_MODEL),
            quick_search: None,
        },
    ],
};

pub(crate) static PROFILE_MODEL: RecordModel = RecordModel {
    path: "dynq_core::test_fixtures::Profile",
    record_name: "profile",
    primary_key: "Id",
    fields: &[
        FieldModel {
            name: "Id",
            kind: FieldKind::Uint,
            quick_search: Some(CompareOp::Eq),
        },
        FieldModel {
            name: "Bio",
            kind: FieldKind::Text,
            quick_search: None,
        },
        FieldModel {
            name: "LinkedInUrl",
            kind: FieldKind::Text,
            quick_search: Some(CompareOp::Like),
        },
    ],
};

pub(crate) static INSTRUCTOR_MODEL: RecordModel = RecordModel {
    path: "dynq_core::test_fixtures::Instructor",
    record_name: "instructor",
    primary_key: "Id",
    fields: &[
        FieldModel {
            name: "Id",
            kind: FieldKind::Uint,
            quick_search: Some(CompareOp::Eq),
        },
        FieldModel {
            name: "FullName",
            kind: FieldKind::Text,
            quick_search: Some(CompareOp::Like),
        },
        FieldModel {
            name: "Profile",
            kind: FieldKind::Nested(&PROFILE_MODEL),
            quick_search: Some(CompareOp::Like),
        },
    ],
};

pub(crate) static COURSE_MODEL: RecordModel = RecordModel {
    path: "dynq_core::test_fixtures::Course",
    record_name: "course",
    primary_key: "Id",
    fields: &[
        FieldModel {
            name: "Id",
            kind: FieldKind::Uint,
            quick_search: Some(CompareOp::Eq),
        },
        FieldModel {
            name: "CreatedAt",
            kind: FieldKind::Timestamp,
            quick_search: None,
        },
        FieldModel {
            name: "InstructorId",
            kind: FieldKind::Uint,
            quick_search: None,
        },
        FieldModel {
            name: "Title",
            kind: FieldKind::Text,
            quick_search: Some(CompareOp::Like),
        },
        FieldModel {
            name: "Published",
            kind: FieldKind::Bool,
            quick_search: None,
        },
        FieldModel {
            name: "Instructor",
            kind: FieldKind::Nested(&INSTRUCTOR_MODEL),
            quick_search: Some(CompareOp::Like),
        },
        FieldModel {
            name: "Modules",
            kind: FieldKind::List(&MODULE_MODEL),
            quick_search: None,
        },
    ],
};

#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct Lesson {
    pub id: Option<u64>,
    pub title: Option<String>,
    pub duration_secs: Option<u64>,
}

record_impl! {
    Lesson {
        model = &LESSON_MODEL,
        scalars = {
            "Id" => id,
            "Title" => title,
            "DurationSecs" => duration_secs,
        },
        nested = {},
        collections = {},
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct Module {
    pub id: Option<u64>,
    pub title: Option<String>,
    pub lessons: Option<Vec<Lesson>>,
}

record_impl! {
    Module {
        model = &MODULE_MODEL,
        scalars = {
            "Id" => id,
            "Title" => title,
        },
        nested = {},
        collections = {
            "Lessons" => lessons,
        },
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct Profile {
    pub id: Option<u64>,
    pub bio: Option<String>,
    pub linked_in_url: Option<String>,
}

record_impl! {
    Profile {
        model = &PROFILE_MODEL,
        scalars = {
            "Id" => id,
            "Bio" => bio,
            "LinkedInUrl" => linked_in_url,
        },
        nested = {},
        collections = {},
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct Instructor {
    pub id: Option<u64>,
    pub full_name: Option<String>,
    pub profile: Option<Profile>,
}

record_impl! {
    Instructor {
        model = &INSTRUCTOR_MODEL,
        scalars = {
            "Id" => id,
            "FullName" => full_name,
        },
        nested = {
            "Profile" => profile,
        },
        collections = {},
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct Course {
    pub id: Option<u64>,
    pub created_at: Option<DateTime<Utc>>,
    pub instructor_id: Option<u64>,
    pub title: Option<String>,
    pub published: Option<bool>,
    pub instructor: Option<Instructor>,
    pub modules: Option<Vec<Module>>,
}

record_impl! {
    Course {
        model = &COURSE_MODEL,
        scalars = {
            "Id" => id,
            "CreatedAt" => created_at,
            "InstructorId" => instructor_id,
            "Title" => title,
            "Published" => published,
        },
        nested = {
            "Instructor" => instructor,
        },
        collections = {
            "Modules" => modules,
        },
    }
}

fn instructor(id: u64, name: &str, linked_in: Option<&str>) -> Instructor {
    Instructor {
        id: Some(id),
        full_name: Some(name.to_string()),
        profile: linked_in.map(|url| Profile {
            id: Some(id * 10),
            bio: Some(format!("{name} teaches here")),
            linked_in_url: Some(url.to_string()),
        }),
    }
}

fn lesson(id: u64, title: &str, duration_secs: u64) -> Lesson {
    Lesson {
        id: Some(id),
        title: Some(title.to_string()),
        duration_secs: Some(duration_secs),
    }
}

fn module(id: u64, title: &str, lessons: Vec<Lesson>) -> Module {
    Module {
        id: Some(id),
        title: Some(title.to_string()),
        lessons: Some(lessons),
    }
}

// Ten courses: three by instructor 42, two without any instructor, mixed
// module shapes. Tests lean on these exact counts.
pub(crate) fn course_catalog() -> Vec<Course> {
    let galois = instructor(42, "Evariste Galois", Some("https://www.linkedin.com/in/galois"));
    let noether = instructor(7, "Emmy Noether", Some("https://www.linkedin.com/in/noether"));
    let euler = instructor(13, "Leonhard Euler", None);

    let mut courses = vec![
        Course {
            id: Some(1),
            created_at: Some(Utc.with_ymd_and_hms(2024, 1, 5, 9, 0, 0).unwrap()),
            instructor_id: Some(42),
            title: Some("Group Theory Fundamentals".to_string()),
            published: Some(true),
            instructor: Some(galois.clone()),
            modules: Some(vec![
                module(
                    11,
                    "Permutations",
                    vec![lesson(111, "Cycles", 1200), lesson(112, "Transpositions", 900)],
                ),
                module(12, "Subgroups", vec![lesson(121, "Cosets", 1500)]),
            ]),
        },
        Course {
            id: Some(2),
            created_at: Some(Utc.with_ymd_and_hms(2024, 2, 10, 9, 0, 0).unwrap()),
            instructor_id: Some(7),
            title: Some("Rings and Ideals".to_string()),
            published: Some(true),
            instructor: Some(noether.clone()),
            modules: Some(vec![module(
                21,
                "Ideals",
                vec![lesson(211, "Principal Ideals", 1100)],
            )]),
        },
        Course {
            id: Some(3),
            created_at: Some(Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap()),
            instructor_id: Some(13),
            title: Some("Graph Walks".to_string()),
            published: Some(false),
            instructor: Some(euler.clone()),
            modules: None,
        },
        Course {
            id: Some(4),
            created_at: Some(Utc.with_ymd_and_hms(2024, 3, 15, 9, 0, 0).unwrap()),
            instructor_id: Some(42),
            title: Some("Field Extensions".to_string()),
            published: Some(true),
            instructor: Some(galois.clone()),
            modules: Some(vec![module(
                41,
                "Splitting Fields",
                vec![
                    lesson(411, "Minimal Polynomials", 1300),
                    lesson(412, "Algebraic Closures", 1700),
                ],
            )]),
        },
        Course {
            id: Some(5),
            created_at: Some(Utc.with_ymd_and_hms(2024, 4, 2, 9, 0, 0).unwrap()),
            instructor_id: None,
            title: Some("Self-Paced Algebra".to_string()),
            published: Some(false),
            instructor: None,
            modules: Some(vec![]),
        },
        Course {
            id: Some(6),
            created_at: Some(Utc.with_ymd_and_hms(2024, 4, 20, 9, 0, 0).unwrap()),
            instructor_id: Some(7),
            title: Some("Invariant Theory".to_string()),
            published: Some(true),
            instructor: Some(noether),
            modules: None,
        },
        Course {
            id: Some(7),
            created_at: Some(Utc.with_ymd_and_hms(2024, 5, 9, 9, 0, 0).unwrap()),
            instructor_id: Some(42),
            title: Some("Solvability by Radicals".to_string()),
            published: Some(true),
            instructor: Some(galois),
            modules: Some(vec![module(
                71,
                "Radical Towers",
                vec![lesson(711, "Root Adjunction", 1000)],
            )]),
        },
        Course {
            id: Some(8),
            created_at: Some(Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap()),
            instructor_id: Some(13),
            title: Some("Seven Bridges".to_string()),
            published: Some(true),
            instructor: Some(euler),
            modules: None,
        },
        Course {
            id: Some(9),
            created_at: Some(Utc.with_ymd_and_hms(2024, 6, 18, 9, 0, 0).unwrap()),
            instructor_id: None,
            title: Some("Study Hall".to_string()),
            published: Some(false),
            instructor: None,
            modules: None,
        },
        Course {
            id: Some(10),
            created_at: Some(Utc.with_ymd_and_hms(2024, 7, 4, 9, 0, 0).unwrap()),
            instructor_id: Some(99),
            title: Some("Guest Lectures".to_string()),
            published: Some(true),
            instructor: Some(instructor(99, "Rotating Guests", None)),
            modules: None,
        },
    ];

    // Deterministic but not pre-sorted by anything interesting.
    courses.swap(2, 8);
    courses
}
