//! Home-page and résumé content: technology stack, headline metrics, career
//! and education timelines, skill badges.

use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Category {
    #[default]
    Backend,
    Database,
    Cloud,
    Tools,
    Architecture,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Backend,
        Category::Database,
        Category::Cloud,
        Category::Tools,
        Category::Architecture,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Backend => "Backend",
            Self::Database => "Databases",
            Self::Cloud => "Cloud",
            Self::Tools => "Tools",
            Self::Architecture => "Architecture",
        }
    }
}

pub const MAX_LEVEL: u8 = 5;

#[derive(Debug)]
pub struct Technology {
    pub name: &'static str,
    pub level: u8,
    pub category: Category,
    pub swatch: &'static str,
}

impl Technology {
    /// One flag per level dot, filled up to `level`.
    pub fn level_dots(&self) -> [bool; MAX_LEVEL as usize] {
        std::array::from_fn(|i| (i as u8) < self.level)
    }

    pub fn initial(&self) -> char {
        self.name.chars().next().unwrap_or('?')
    }
}

const fn tech(name: &'static str, level: u8, category: Category, swatch: &'static str) -> Technology {
    Technology {
        name,
        level,
        category,
        swatch,
    }
}

pub static TECHNOLOGIES: [Technology; 25] = [
    tech("C#", 5, Category::Backend, "bg-neon-blue"),
    tech(".NET Core", 5, Category::Backend, "bg-purple-500"),
    tech("ASP.NET", 5, Category::Backend, "bg-blue-500"),
    tech("Entity Framework", 4, Category::Backend, "bg-indigo-500"),
    tech("REST API", 5, Category::Backend, "bg-green-500"),
    tech("LINQ", 5, Category::Backend, "bg-blue-400"),
    tech("SignalR", 4, Category::Backend, "bg-red-500"),
    tech("gRPC", 3, Category::Backend, "bg-orange-500"),
    tech("WPF", 4, Category::Backend, "bg-blue-600"),
    tech("SQL Server", 5, Category::Database, "bg-red-600"),
    tech("PostgreSQL", 4, Category::Database, "bg-blue-800"),
    tech("MongoDB", 3, Category::Database, "bg-green-600"),
    tech("Redis", 4, Category::Database, "bg-red-500"),
    tech("Azure", 4, Category::Cloud, "bg-blue-500"),
    tech("Azure DevOps", 4, Category::Cloud, "bg-blue-600"),
    tech("Docker", 4, Category::Cloud, "bg-blue-700"),
    tech("Kubernetes", 3, Category::Cloud, "bg-blue-800"),
    tech("Git", 5, Category::Tools, "bg-orange-500"),
    tech("NuGet", 5, Category::Tools, "bg-blue-400"),
    tech("Visual Studio", 5, Category::Tools, "bg-purple-600"),
    tech("ReSharper", 4, Category::Tools, "bg-red-500"),
    tech("Microservices", 4, Category::Architecture, "bg-neon-green"),
    tech("DDD", 4, Category::Architecture, "bg-yellow-500"),
    tech("CQRS", 4, Category::Architecture, "bg-purple-500"),
    tech("Event Sourcing", 3, Category::Architecture, "bg-red-500"),
];

pub fn technologies_in(category: Category) -> Vec<&'static Technology> {
    TECHNOLOGIES
        .iter()
        .filter(|t| t.category == category)
        .collect()
}

#[derive(Debug)]
pub struct Metric {
    pub label: &'static str,
    pub value: u32,
    pub suffix: Option<&'static str>,
    pub description: &'static str,
    pub swatch: &'static str,
}

pub static METRICS: [Metric; 4] = [
    Metric {
        label: "Years of experience",
        value: 8,
        suffix: Some("+"),
        description: "Of continuous C# and .NET development",
        swatch: "bg-gradient-to-br from-neon-blue to-blue-700",
    },
    Metric {
        label: "Projects",
        value: 42,
        suffix: None,
        description: "Delivered to production",
        swatch: "bg-gradient-to-br from-purple-600 to-neon-blue",
    },
    Metric {
        label: "GitHub stars",
        value: 720,
        suffix: None,
        description: "Across open-source repositories",
        swatch: "bg-gradient-to-br from-yellow-500 to-orange-500",
    },
    Metric {
        label: "Downloads",
        value: 25,
        suffix: Some("K+"),
        description: "Of NuGet packages with my libraries",
        swatch: "bg-gradient-to-br from-neon-green to-green-600",
    },
];

pub const COUNTER_DURATION: Duration = Duration::from_millis(2000);
pub const COUNTER_FRAME: Duration = Duration::from_millis(16);

/// Linear count-up from zero to `target` over `duration`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterAnimation {
    pub target: u32,
    pub duration: Duration,
}

impl CounterAnimation {
    pub fn new(target: u32) -> Self {
        Self {
            target,
            duration: COUNTER_DURATION,
        }
    }

    pub fn progress(&self, elapsed: Duration) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
    }

    pub fn value_at(&self, elapsed: Duration) -> u32 {
        (self.progress(elapsed) * self.target as f64).floor() as u32
    }

    pub fn is_done(&self, elapsed: Duration) -> bool {
        elapsed >= self.duration
    }
}

#[derive(Debug)]
pub struct TimelineItem {
    pub period: &'static str,
    pub company: &'static str,
    pub position: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
}

pub static CAREER: [TimelineItem; 4] = [
    TimelineItem {
        period: "2021 — present",
        company: "FinTech Innovations",
        position: "Lead C# Developer",
        description: "Leading the development team, designing and implementing a microservice architecture for a high-load payment system. Performance optimisation and scaling.",
        technologies: &["C#", "ASP.NET Core", "Microservices", "Azure", "SQL Server", "Redis", "RabbitMQ"],
    },
    TimelineItem {
        period: "2019 — 2021",
        company: "Digital Solutions",
        position: "Senior C# Developer",
        description: "Built an enterprise CRM integrating many external APIs. Architecture design, database performance tuning and CI/CD pipelines.",
        technologies: &["C#", ".NET Core", "Entity Framework", "Azure DevOps", "SQL Server", "TypeScript"],
    },
    TimelineItem {
        period: "2017 — 2019",
        company: "TechnoSoft",
        position: "C# Developer",
        description: "Desktop applications for business process automation, report generation modules and integrations with third-party APIs and databases.",
        technologies: &["C#", "WPF", "MVVM", "SQLite", "PostgreSQL", "REST API"],
    },
    TimelineItem {
        period: "2015 — 2017",
        company: "IT Consulting",
        position: "Junior C# Developer",
        description: "Developed and maintained internal corporate systems, data processing modules and SQL Server reports.",
        technologies: &["C#", ".NET Framework", "ASP.NET MVC", "SQL Server", "jQuery"],
    },
];

#[derive(Debug)]
pub struct EducationItem {
    pub period: &'static str,
    pub institution: &'static str,
    pub degree: &'static str,
}

pub static EDUCATION: [EducationItem; 3] = [
    EducationItem {
        period: "2010 — 2015",
        institution: "Moscow Technical University",
        degree: "MSc in Information Technology",
    },
    EducationItem {
        period: "2019",
        institution: "Microsoft Learn",
        degree: "Microsoft Certified: Azure Developer Associate",
    },
    EducationItem {
        period: "2021",
        institution: "Coursera",
        degree: "Software Architecture Specialization",
    },
];

#[derive(Debug)]
pub struct Skill {
    pub name: &'static str,
    pub level: u8,
}

#[derive(Debug)]
pub struct SkillGroup {
    pub title: &'static str,
    pub skills: &'static [Skill],
}

const fn skill(name: &'static str, level: u8) -> Skill {
    Skill { name, level }
}

pub static SKILLS: [SkillGroup; 4] = [
    SkillGroup {
        title: "Languages",
        skills: &[
            skill("C#", 95),
            skill("TypeScript", 75),
            skill("SQL", 85),
            skill("HTML/CSS", 70),
        ],
    },
    SkillGroup {
        title: "Frameworks",
        skills: &[
            skill(".NET Core", 95),
            skill("ASP.NET", 90),
            skill("Entity Framework", 85),
            skill("WPF", 80),
        ],
    },
    SkillGroup {
        title: "Databases",
        skills: &[
            skill("SQL Server", 90),
            skill("PostgreSQL", 80),
            skill("MongoDB", 70),
            skill("Redis", 75),
        ],
    },
    SkillGroup {
        title: "Cloud",
        skills: &[
            skill("Azure", 85),
            skill("Docker", 80),
            skill("Kubernetes", 65),
            skill("CI/CD", 85),
        ],
    },
];

pub const SPOKEN_LANGUAGES: &str = "Russian (native), English (fluent)";
pub const INTERESTS: &str =
    "Open source, software architecture, machine learning, technical conferences";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_is_default_category() {
        let names = technologies_in(Category::default())
            .iter()
            .map(|t| t.name)
            .collect::<Vec<_>>();
        assert_eq!(names.len(), 9);
        assert_eq!(names[0], "C#");
        assert_eq!(names[8], "WPF");
    }

    #[test]
    fn test_every_category_populated() {
        let total = Category::ALL
            .iter()
            .map(|c| technologies_in(*c).len())
            .sum::<usize>();
        assert_eq!(total, TECHNOLOGIES.len());
        assert_eq!(technologies_in(Category::Database).len(), 4);
    }

    #[test]
    fn test_level_dots() {
        let grpc = TECHNOLOGIES
            .iter()
            .find(|t| t.name == "gRPC")
            .expect("gRPC should be listed");
        assert_eq!(grpc.level_dots(), [true, true, true, false, false]);
        assert!(TECHNOLOGIES.iter().all(|t| (1..=MAX_LEVEL).contains(&t.level)));
        assert_eq!(grpc.initial(), 'g');
    }

    #[test]
    fn test_counter_progression() {
        let counter = CounterAnimation::new(720);
        assert_eq!(counter.value_at(Duration::ZERO), 0);
        assert_eq!(counter.value_at(Duration::from_millis(1000)), 360);
        assert_eq!(counter.value_at(Duration::from_millis(1999)), 719);
        assert_eq!(counter.value_at(Duration::from_millis(2000)), 720);
        // clamps past the end
        assert_eq!(counter.value_at(Duration::from_secs(10)), 720);
        assert!(!counter.is_done(Duration::from_millis(1999)));
        assert!(counter.is_done(Duration::from_millis(2000)));
    }

    #[test]
    fn test_counter_floors() {
        let counter = CounterAnimation::new(8);
        // 8 * 0.1 = 0.8
        assert_eq!(counter.value_at(Duration::from_millis(200)), 0);
        assert_eq!(counter.value_at(Duration::from_millis(250)), 1);
    }

    #[test]
    fn test_zero_duration_counter_is_immediate() {
        let counter = CounterAnimation {
            target: 42,
            duration: Duration::ZERO,
        };
        assert_eq!(counter.value_at(Duration::ZERO), 42);
        assert!(counter.is_done(Duration::ZERO));
    }

    #[test]
    fn test_skill_levels_are_percentages() {
        assert!(SKILLS
            .iter()
            .flat_map(|g| g.skills.iter())
            .all(|s| s.level <= 100));
    }
}
