//! A small bundled set of real postings, used whatever the APIs return.

use crate::RawJob;

pub const SEED_SOURCE: &str = "Public Dataset";

// (title, company, location, description, url)
const SEED_POSTINGS: &[(&str, &str, &str, &str, &str)] = &[
    (
        "Senior Software Engineer",
        "Google",
        "Mountain View, CA",
        "Design, develop, test, deploy, maintain and improve software. Manage individual project priorities, deadlines and deliverables. Write clean, efficient, and well-documented code. Collaborate with cross-functional teams to define and ship new features.",
        "https://careers.google.com",
    ),
    (
        "Frontend Developer",
        "Facebook",
        "Menlo Park, CA",
        "Build scalable web applications using React.js. Implement responsive designs and ensure cross-browser compatibility. Collaborate with UX designers and backend engineers. Optimize web performance and accessibility.",
        "https://facebook.com/careers",
    ),
    (
        "Backend Engineer",
        "Amazon",
        "Seattle, WA",
        "Develop scalable distributed systems using AWS technologies. Design and implement RESTful APIs. Work with databases and caching systems. Ensure high availability and performance of services.",
        "https://amazon.jobs",
    ),
    (
        "Full Stack Developer",
        "Netflix",
        "Los Gatos, CA",
        "Develop end-to-end features for streaming platform. Work with React frontend and Java/Spring backend. Implement microservices architecture. Participate in code reviews and architectural discussions.",
        "https://jobs.netflix.com",
    ),
    (
        "DevOps Engineer",
        "Microsoft",
        "Redmond, WA",
        "Implement CI/CD pipelines using Azure DevOps. Manage cloud infrastructure on Azure. Automate deployment and monitoring processes. Ensure system reliability and scalability.",
        "https://careers.microsoft.com",
    ),
    (
        "Machine Learning Engineer",
        "Apple",
        "Cupertino, CA",
        "Develop machine learning models for product features. Work with large datasets and implement data pipelines. Collaborate with research scientists and product teams. Deploy models to production environments.",
        "https://apple.com/careers",
    ),
    (
        "Data Engineer",
        "Twitter",
        "San Francisco, CA",
        "Build and maintain data pipelines for analytics. Work with big data technologies like Hadoop and Spark. Design data models and ensure data quality. Support data scientists and analysts.",
        "https://careers.twitter.com",
    ),
    (
        "Mobile Developer",
        "Uber",
        "San Francisco, CA",
        "Develop native mobile applications for iOS and Android. Implement user interfaces and business logic. Work with cross-platform technologies when appropriate. Ensure app performance and quality.",
        "https://uber.com/careers",
    ),
    (
        "Cloud Engineer",
        "Salesforce",
        "San Francisco, CA",
        "Design and implement cloud infrastructure on AWS/Azure. Automate deployment and scaling processes. Ensure security and compliance of cloud environments. Monitor system performance and costs.",
        "https://salesforce.com/careers",
    ),
    (
        "QA Automation Engineer",
        "Adobe",
        "San Jose, CA",
        "Develop automated test frameworks and scripts. Create and execute test plans for software products. Collaborate with developers to ensure quality. Implement continuous testing in CI/CD pipelines.",
        "https://adobe.com/careers",
    ),
];

pub fn seed_jobs() -> Vec<RawJob> {
    SEED_POSTINGS
        .iter()
        .map(|&(title, company, location, description, url)| {
            RawJob::new(
                title.to_string(),
                company.to_string(),
                location.to_string(),
                description.to_string(),
            )
            .with_source(SEED_SOURCE, url)
        })
        .collect()
}
