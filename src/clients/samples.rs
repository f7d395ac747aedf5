use crate::RawJob;
use rand::Rng;
use rand::prelude::IndexedRandom;

pub const SAMPLE_SOURCE: &str = "Realistic Sample";

const COMPANIES: &[&str] = &[
    "Google", "Microsoft", "Amazon", "Meta", "Apple", "Netflix", "Twitter", "Uber", "Airbnb",
    "Stripe", "Salesforce", "Oracle", "Adobe", "Intel", "IBM", "Cisco", "Spotify", "Slack", "Zoom",
];

const TECH_STACKS: &[[&str; 4]] = &[
    ["Python", "Django", "PostgreSQL", "AWS"],
    ["JavaScript", "React", "Node.js", "MongoDB"],
    ["Java", "Spring Boot", "MySQL", "Azure"],
    ["C#", ".NET", "SQL Server", "Azure"],
    ["TypeScript", "Angular", "Express.js", "MongoDB"],
    ["Python", "Flask", "Redis", "Docker"],
    ["Ruby", "Rails", "PostgreSQL", "Heroku"],
    ["Go", "Kubernetes", "gRPC", "GCP"],
];

const LEVELS: &[&str] = &["Junior", "Mid-Level", "Senior"];
const ROLES: &[&str] = &["Backend", "Frontend", "Full Stack", "DevOps"];
const LOCATIONS: &[&str] = &[
    "San Francisco, CA",
    "New York, NY",
    "Remote",
    "Austin, TX",
    "Seattle, WA",
];

/// Synthetic postings used to pad a thin collection.
#[derive(Debug, Default)]
pub struct SampleGenerator;

impl SampleGenerator {
    pub fn new() -> Self {
        Self
    }

    pub fn generate(&self, count: usize, rng: &mut impl Rng) -> Vec<RawJob> {
        (0..count).map(|i| self.sample(i, rng)).collect()
    }

    fn sample(&self, index: usize, rng: &mut impl Rng) -> RawJob {
        let company = pick(COMPANIES, rng);
        let stack = TECH_STACKS.choose(rng).unwrap_or(&TECH_STACKS[0]);
        let level = pick(LEVELS, rng);
        let role = pick(ROLES, rng);
        let years = rng.random_range(1..=8);

        let description = format!(
            "{company} is hiring a {level} {role} Developer to join our team.

Responsibilities:
- Develop and maintain software applications using {stack}
- Collaborate with cross-functional teams to deliver high-quality products
- Write clean, efficient, and well-tested code
- Participate in code reviews and architectural discussions
- Stay current with emerging technologies and best practices

Requirements:
- {years}+ years of software development experience
- Proficiency in {primary} and related technologies
- Experience with modern development practices and tools
- Strong problem-solving and communication skills
- Bachelor's degree in Computer Science or equivalent experience

We offer competitive compensation, comprehensive benefits, and opportunities for growth.",
            stack = stack.join(", "),
            primary = stack[0],
        );

        RawJob::new(
            format!("{} {} Developer", level, role),
            company.to_string(),
            pick(LOCATIONS, rng).to_string(),
            description,
        )
        .with_source(
            SAMPLE_SOURCE,
            format!(
                "https://{}.com/careers/{}",
                company.to_lowercase(),
                index + 1000
            ),
        )
    }
}

fn pick<'a>(options: &[&'a str], rng: &mut impl Rng) -> &'a str {
    options.choose(rng).copied().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cleaner::JobCleaner;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_generate_count_and_source() {
        let mut rng = StdRng::seed_from_u64(42);
        let jobs = SampleGenerator::new().generate(12, &mut rng);

        assert_eq!(jobs.len(), 12);
        assert!(jobs.iter().all(|j| j.source == SAMPLE_SOURCE));
        assert!(jobs[0].url.ends_with("/careers/1000"));
        assert!(jobs[11].url.ends_with("/careers/1011"));
    }

    #[test]
    fn test_same_seed_same_samples() {
        let a = SampleGenerator::new().generate(5, &mut StdRng::seed_from_u64(1));
        let b = SampleGenerator::new().generate(5, &mut StdRng::seed_from_u64(1));
        assert_eq!(a, b);
    }

    #[test]
    fn test_samples_survive_cleaning() {
        let jobs = SampleGenerator::new().generate(3, &mut StdRng::seed_from_u64(9));
        let cleaner = JobCleaner::new();
        for job in &jobs {
            let cleaned = cleaner.clean_job(job).unwrap();
            assert!(cleaned.description.contains("bachelors degree"));
        }
    }
}
