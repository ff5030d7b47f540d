use super::{CareerProfile, Education};

pub fn reference_profiles() -> Vec<CareerProfile> {
    vec![
        CareerProfile::new(
            "Software Engineer",
            &["java", "python", "javascript", "git", "problem solving"],
            &["technology", "coding", "innovation"],
            Education::Bachelor,
        ),
        CareerProfile::new(
            "Data Scientist",
            &["python", "machine learning", "statistics", "data visualization"],
            &["technology", "research", "data"],
            Education::Master,
        ),
        CareerProfile::new(
            "Data Analyst",
            &["python", "excel", "sql", "data visualization"],
            &["technology", "data", "business"],
            Education::Bachelor,
        ),
        CareerProfile::new(
            "Web Developer",
            &["html", "css", "javascript", "react"],
            &["technology", "design", "coding"],
            Education::Diploma,
        ),
        CareerProfile::new(
            "Graphic Designer",
            &["photoshop", "illustrator", "typography", "creativity"],
            &["art", "design", "media"],
            Education::Diploma,
        ),
        CareerProfile::new(
            "Digital Marketer",
            &["seo", "social media", "content writing", "excel"],
            &["marketing", "media", "business"],
            Education::Bachelor,
        ),
        CareerProfile::new(
            "Accountant",
            &["excel", "accounting", "tally", "finance"],
            &["finance", "business"],
            Education::Bachelor,
        ),
        CareerProfile::new(
            "Teacher",
            &["communication", "public speaking", "subject knowledge", "patience"],
            &["education", "mentoring"],
            Education::Bachelor,
        ),
        CareerProfile::new(
            "Nurse",
            &["patient care", "first aid", "communication", "empathy"],
            &["healthcare", "helping people"],
            Education::Diploma,
        ),
        CareerProfile::new(
            "Electrician",
            &["wiring", "circuit repair", "safety compliance", "troubleshooting"],
            &["engineering", "hands-on work"],
            Education::HighSchool,
        ),
    ]
}
