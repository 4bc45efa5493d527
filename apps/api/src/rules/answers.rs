//! The literal answer table. This is configuration data, not logic: keyword
//! lists and canned replies for the questions recruiters and visitors ask
//! most. The matching mechanism lives in the parent module.
//!
//! Keywords must be lowercase — they are compared against a lower-cased
//! question by substring containment.

use super::{Branch, Registry, Topic, TopicHandler};

const FUN_FACTS: TopicHandler = TopicHandler {
    topic: Topic::FunFacts,
    branches: &[
        Branch {
            keywords: &["girlfriend", "relationship", "single", "wife", "crush"],
            answer: "Haha, that’s classified! Bharat is more in love with Laravel and clean code than dating apps.",
        },
        Branch {
            keywords: &["favorite food"],
            answer: "He runs on Java, Laravel, and a weekly dose of biryani.",
        },
        Branch {
            keywords: &["age"],
            answer: "Age is just metadata—unless it’s in the schema 😉.",
        },
        Branch {
            keywords: &["hobbies", "free time", "weekend"],
            answer: "Coding personal projects, exploring cloud platforms, or refining UI components in React.",
        },
        Branch {
            keywords: &["fruit"],
            answer: "Mango—clean APIs on the outside, rich ORM layers inside.",
        },
        Branch {
            keywords: &["island"],
            answer: "Self-host Laravel on a Pi, deploy to the cloud, and chill by the sea.",
        },
        Branch {
            keywords: &["emoji"],
            answer: "💻—because that’s where he lives most of the time.",
        },
        Branch {
            keywords: &["favorite framework"],
            answer: "Laravel and Spring Boot for the backend, ReactJS for the frontend—a powerful combo.",
        },
    ],
};

const RECRUITER_LOGISTICS: TopicHandler = TopicHandler {
    topic: Topic::RecruiterLogistics,
    branches: &[
        Branch {
            keywords: &["sponsorship", "visa", "work authorization"],
            answer: "Bharat is on STEM OPT and authorized to work in the U.S. Sponsorship can be considered for future roles.",
        },
        Branch {
            keywords: &["notice period"],
            answer: "Typically a 2-week notice, but flexible for the right opportunity.",
        },
        Branch {
            keywords: &["salary expectation", "current salary", "expected salary"],
            answer: "Open to discussion—Bharat values the right role, team, and impact.",
        },
        Branch {
            keywords: &["relocation", "open to relocation"],
            answer: "Open to remote, hybrid, or relocation roles depending on the opportunity.",
        },
    ],
};

const COMPANY_HISTORY: TopicHandler = TopicHandler {
    topic: Topic::CompanyHistory,
    branches: &[
        Branch {
            keywords: &["current company", "working now", "adroit"],
            answer: "Bharat is currently working at Agile Adroit LLC as a Web Developer (since September 2024).",
        },
        Branch {
            keywords: &["fagron", "wichita state", "university job"],
            answer: "He worked at Fagron Sterile Services (Wichita State University) as a Web Developer from Dec 2022 to May 2024.",
        },
        Branch {
            keywords: &["capgemini"],
            answer: "At Capgemini (May 2020–May 2022), Bharat developed enterprise applications using Java, Struts, and SQL databases.",
        },
    ],
};

const TECH_STACK: TopicHandler = TopicHandler {
    topic: Topic::TechStack,
    branches: &[
        Branch {
            keywords: &["spring boot", "java"],
            answer: "He builds scalable backends using Java 11+, Spring Boot, and Struts with SQL/Oracle databases.",
        },
        Branch {
            keywords: &["react", "reactjs"],
            answer: "Bharat creates responsive UIs with ReactJS and Angular 4, using modern component architecture.",
        },
        Branch {
            keywords: &["aws"],
            answer: "He deploys applications on AWS, using services like EC2, RDS, and S3 for hosting and scaling.",
        },
        Branch {
            keywords: &["docker", "kubernetes"],
            answer: "He containerizes applications with Docker and is familiar with deploying to cloud-based infrastructure.",
        },
        Branch {
            keywords: &["ci/cd", "jenkins", "github"],
            answer: "He manages CI/CD using Git, Bitbucket, and Docker, ensuring reliable, automated deployment pipelines.",
        },
    ],
};

const EDUCATION: TopicHandler = TopicHandler {
    topic: Topic::Education,
    branches: &[
        Branch {
            keywords: &["master", "wichita state"],
            answer: "He earned his Master’s in Computer Science from Wichita State University (Aug 2022 – May 2024).",
        },
        Branch {
            keywords: &["bachelor"],
            answer: "Bachelor’s in Computer Science with early experience in Python and data projects.",
        },
        Branch {
            keywords: &["certification", "certified"],
            answer: "Certifications include:\n- AWS Certified Developer – Associate\n- Microsoft Power BI Data Analyst\n- Linux Server Management and Security",
        },
    ],
};

const PROJECTS: TopicHandler = TopicHandler {
    topic: Topic::Projects,
    branches: &[
        Branch {
            keywords: &["wordpress", "plugin"],
            answer: "Bharat has built and maintained custom WordPress plugins and themes, integrating with APIs and ensuring WCAG 2.1 accessibility.",
        },
        Branch {
            keywords: &["employee", "scheduling"],
            answer: "He developed a scheduling and reporting app to track employee clock-ins, schedules, and performance metrics.",
        },
    ],
};

// No volunteer experience in the current resume. The slot stays in the
// priority order so adding branches later cannot reshuffle other topics.
const VOLUNTEER: TopicHandler = TopicHandler {
    topic: Topic::Volunteer,
    branches: &[],
};

const BEHAVIORAL: TopicHandler = TopicHandler {
    topic: Topic::Behavioral,
    branches: &[Branch {
        keywords: &["tell me about a time", "example of", "how did you"],
        answer: "Sure—Bharat once optimized a reporting tool that improved query efficiency by 30% using MySQL tuning and modular backend refactoring at Agile Adroit.",
    }],
};

/// Priority order: personal topics first, then recruiter logistics, then the
/// resume-derived topics. Changing this order changes which answer wins for
/// questions that hit multiple topics.
const HANDLERS: &[TopicHandler] = &[
    FUN_FACTS,
    RECRUITER_LOGISTICS,
    COMPANY_HISTORY,
    TECH_STACK,
    EDUCATION,
    PROJECTS,
    VOLUNTEER,
    BEHAVIORAL,
];

pub const fn default_registry() -> Registry {
    Registry::new(HANDLERS)
}
