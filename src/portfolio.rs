use crate::filter::{by_tag, TagFilter, Tagged};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectTag {
    CSharp,
    DotNet,
    AspNet,
    Azure,
    Microservices,
    Wpf,
    EntityFramework,
}

impl ProjectTag {
    pub const ALL: [ProjectTag; 7] = [
        ProjectTag::CSharp,
        ProjectTag::DotNet,
        ProjectTag::AspNet,
        ProjectTag::Azure,
        ProjectTag::Microservices,
        ProjectTag::Wpf,
        ProjectTag::EntityFramework,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::CSharp => "C#",
            Self::DotNet => ".NET",
            Self::AspNet => "ASP.NET",
            Self::Azure => "Azure",
            Self::Microservices => "Microservices",
            Self::Wpf => "WPF",
            Self::EntityFramework => "EntityFramework",
        }
    }
}

#[derive(Debug)]
pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [ProjectTag],
    pub image: &'static str,
    pub link: Option<&'static str>,
    pub github_link: Option<&'static str>,
}

impl Tagged for Project {
    type Tag = ProjectTag;

    fn tags(&self) -> &[ProjectTag] {
        self.tags
    }
}

use ProjectTag::*;

pub static PROJECTS: [Project; 6] = [
    Project {
        id: "1",
        title: "Warehouse Management System",
        description: "High-load inventory management application built on a microservice architecture",
        tags: &[CSharp, DotNet, AspNet, Microservices, EntityFramework],
        image: "https://images.unsplash.com/photo-1565043589221-1a3fd919584d?ixlib=rb-1.2.1&auto=format&fit=crop&q=80",
        link: None,
        github_link: Some("https://github.com/ivan-petrov/warehouse"),
    },
    Project {
        id: "2",
        title: "CRM for a Fintech Company",
        description: "Cloud CRM integrated with banking APIs and a transaction monitoring pipeline",
        tags: &[CSharp, DotNet, AspNet, Azure],
        image: "https://images.unsplash.com/photo-1579621970563-ebec7560ff3e?ixlib=rb-1.2.1&auto=format&fit=crop&q=80",
        link: Some("https://crm.example.com"),
        github_link: None,
    },
    Project {
        id: "3",
        title: "Desktop Analytics Suite",
        description: "WPF application for analysing financial data with charts and reports",
        tags: &[CSharp, Wpf, DotNet],
        image: "https://images.unsplash.com/photo-1551288049-bebda4e38f71?ixlib=rb-1.2.1&auto=format&fit=crop&q=80",
        link: None,
        github_link: Some("https://github.com/ivan-petrov/analytics-suite"),
    },
    Project {
        id: "4",
        title: "Payment Processing API",
        description: "Secure, fault-tolerant API for processing card and bank payments",
        tags: &[DotNet, AspNet, Azure, Microservices],
        image: "https://images.unsplash.com/photo-1567427017947-545c5f8d16ad?ixlib=rb-1.2.1&auto=format&fit=crop&q=80",
        link: Some("https://payments.example.com"),
        github_link: None,
    },
    Project {
        id: "5",
        title: "Data Validation Library",
        description: "Open-source validation library for .NET applications with fluent rule composition",
        tags: &[CSharp, DotNet, EntityFramework],
        image: "https://images.unsplash.com/photo-1555066931-4365d14bab8c?ixlib=rb-1.2.1&auto=format&fit=crop&q=80",
        link: Some("https://www.nuget.org/packages/Petrov.Validation"),
        github_link: Some("https://github.com/ivan-petrov/validation"),
    },
    Project {
        id: "6",
        title: "Cloud Monitoring Platform",
        description: "Performance monitoring for microservice applications running in Azure",
        tags: &[CSharp, DotNet, Azure, Microservices],
        image: "https://images.unsplash.com/photo-1558494949-ef010cbdcc31?ixlib=rb-1.2.1&auto=format&fit=crop&q=80",
        link: None,
        github_link: None,
    },
];

pub fn filter_projects(filter: &TagFilter<ProjectTag>) -> Vec<&'static Project> {
    by_tag(&PROJECTS, filter)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(projects: &[&Project]) -> Vec<&'static str> {
        projects.iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_all_projects() {
        assert_eq!(
            ids(&filter_projects(&TagFilter::All)),
            vec!["1", "2", "3", "4", "5", "6"]
        );
    }

    #[test]
    fn test_filter_by_tag() {
        assert_eq!(ids(&filter_projects(&TagFilter::Only(Wpf))), vec!["3"]);
        assert_eq!(
            ids(&filter_projects(&TagFilter::Only(Azure))),
            vec!["2", "4", "6"]
        );
        assert_eq!(
            ids(&filter_projects(&TagFilter::Only(EntityFramework))),
            vec!["1", "5"]
        );
    }

    #[test]
    fn test_every_tag_button_has_projects() {
        for tag in ProjectTag::ALL {
            assert!(
                !filter_projects(&TagFilter::Only(tag)).is_empty(),
                "{} has no projects",
                tag.label()
            );
        }
    }

    #[test]
    fn test_project_ids_unique() {
        let mut ids = PROJECTS.iter().map(|p| p.id).collect::<Vec<_>>();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), PROJECTS.len());
    }
}
