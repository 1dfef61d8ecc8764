//! Static panels of the employee detail view.
//!
//! The directory API carries no history, so every employee shows the same
//! sample performance reviews, projects and feedback.

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct PerformanceReview {
    pub id: u32,
    pub date: &'static str,
    pub rating: f64,
    pub feedback: &'static str,
    pub reviewer: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    Active,
    Completed,
    Pending,
}

impl ProjectStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Active => "active",
            ProjectStatus::Completed => "completed",
            ProjectStatus::Pending => "pending",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: u32,
    pub name: &'static str,
    pub status: ProjectStatus,
    pub start_date: &'static str,
    pub end_date: &'static str,
    pub role: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackKind {
    Positive,
    Constructive,
    Neutral,
}

impl FeedbackKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FeedbackKind::Positive => "positive",
            FeedbackKind::Constructive => "constructive",
            FeedbackKind::Neutral => "neutral",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Feedback {
    pub id: u32,
    pub date: &'static str,
    #[serde(rename = "type")]
    pub kind: FeedbackKind,
    pub message: &'static str,
    pub from: &'static str,
}

pub fn performance_history() -> Vec<PerformanceReview> {
    vec![
        PerformanceReview {
            id: 1,
            date: "2024-01-15",
            rating: 4.2,
            feedback: "Excellent work on the Q4 project",
            reviewer: "Sarah Johnson",
        },
        PerformanceReview {
            id: 2,
            date: "2023-10-20",
            rating: 3.8,
            feedback: "Good performance, room for improvement in communication",
            reviewer: "Mike Chen",
        },
        PerformanceReview {
            id: 3,
            date: "2023-07-10",
            rating: 4.5,
            feedback: "Outstanding leadership and technical skills",
            reviewer: "Lisa Wang",
        },
    ]
}

pub fn projects() -> Vec<Project> {
    vec![
        Project {
            id: 1,
            name: "E-commerce Platform Redesign",
            status: ProjectStatus::Active,
            start_date: "2024-01-01",
            end_date: "2024-06-30",
            role: "Lead Developer",
            description: "Leading the redesign of our main e-commerce platform with modern UI/UX principles.",
        },
        Project {
            id: 2,
            name: "Mobile App Development",
            status: ProjectStatus::Completed,
            start_date: "2023-08-01",
            end_date: "2023-12-31",
            role: "Senior Developer",
            description: "Developed a cross-platform mobile application.",
        },
        Project {
            id: 3,
            name: "API Integration Project",
            status: ProjectStatus::Pending,
            start_date: "2024-03-01",
            end_date: "2024-05-31",
            role: "Backend Developer",
            description: "Integrating third-party APIs for payment processing and analytics.",
        },
    ]
}

pub fn feedback() -> Vec<Feedback> {
    vec![
        Feedback {
            id: 1,
            date: "2024-02-15",
            kind: FeedbackKind::Positive,
            message: "Great team player and always willing to help others.",
            from: "Team Lead",
        },
        Feedback {
            id: 2,
            date: "2024-01-30",
            kind: FeedbackKind::Constructive,
            message: "Could improve documentation practices for better knowledge sharing.",
            from: "Project Manager",
        },
        Feedback {
            id: 3,
            date: "2024-01-15",
            kind: FeedbackKind::Positive,
            message: "Excellent problem-solving skills and attention to detail.",
            from: "Senior Developer",
        },
    ]
}
