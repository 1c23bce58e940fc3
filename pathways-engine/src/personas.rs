//! Career-path persona and focus lookup
//!
//! Keyed by career-path title. Unknown titles never fail: they resolve to
//! [`DEFAULT_PERSONA`] and [`DEFAULT_FOCUS`].

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Persona for titles missing from the table
pub const DEFAULT_PERSONA: &str = "The Professional";

/// Focus text for titles missing from the table
pub const DEFAULT_FOCUS: &str =
    "Professional development and career growth through expertise and dedication.";

/// (title, persona, focus)
#[rustfmt::skip]
const CAREER_PROFILES: &[(&str, &str, &str)] = &[
    ("Civil Engineer", "The Infrastructure Builder",
     "Designing and constructing infrastructure projects through technical expertise and systematic planning."),
    ("Mechanical Engineer", "The Mechanical Innovator",
     "Developing mechanical systems and solutions through engineering principles and innovation."),
    ("Robotics Engineer", "The Automation Specialist",
     "Creating automated systems and robotic solutions through advanced engineering and programming."),
    ("Software Developer", "The Code Architect",
     "Building software applications through coding, problem-solving, and technical implementation."),
    ("Cybersecurity Analyst", "The Security Guardian",
     "Protecting digital systems and data through security analysis and threat mitigation."),
    ("Cloud Architect", "The Cloud Strategist",
     "Designing cloud infrastructure solutions for scalable and efficient systems."),
    ("Medical Doctor", "The Healthcare Provider",
     "Providing medical care and treatment through clinical expertise and patient interaction."),
    ("Registered Nurse", "The Care Specialist",
     "Delivering patient care and support through medical knowledge and compassion."),
    ("Healthcare Administrator", "The Healthcare Manager",
     "Managing healthcare operations and services through organizational leadership."),
    ("Machine Learning Engineer", "The AI Builder",
     "Developing AI and machine learning systems through advanced algorithms and data science."),
    ("Data Scientist", "The Insight Architect",
     "Analyzing complex data to extract insights and drive decision-making through statistical methods."),
    ("AI Research Scientist", "The AI Researcher",
     "Advancing artificial intelligence through research, experimentation, and innovation."),
    ("Business Intelligence Analyst", "The Business Analyst",
     "Transforming data into business insights through analysis and reporting."),
    ("Operations Analyst", "The Operations Specialist",
     "Optimizing business operations through data analysis and process improvement."),
    ("Market Research Analyst", "The Market Analyst",
     "Understanding market trends and consumer behavior through research and analysis."),
    ("Research Scientist", "The Research Specialist",
     "Conducting scientific research and experiments to advance knowledge and innovation."),
    ("Biotechnologist", "The Biotechnology Expert",
     "Applying biological processes to develop products and solutions through biotechnology."),
    ("Environmental Consultant", "The Environmental Specialist",
     "Addressing environmental challenges through analysis, planning, and sustainable solutions."),
    ("Project Manager", "The Project Leader",
     "Leading projects to successful completion through planning, coordination, and team management."),
    ("Operations Manager", "The Operations Leader",
     "Optimizing business operations through strategic planning and process management."),
    ("Management Consultant", "The Strategy Consultant",
     "Improving organizational performance through strategic advice and analysis."),
    ("Certified Public Accountant", "The Financial Auditor",
     "Ensuring financial accuracy and compliance through accounting expertise and auditing."),
    ("Forensic Accountant", "The Financial Investigator",
     "Investigating financial discrepancies and fraud through detailed analysis and investigation."),
    ("Tax Auditor", "The Tax Specialist",
     "Reviewing tax compliance and accuracy through systematic examination and verification."),
    ("Investment Banker", "The Financial Strategist",
     "Facilitating financial transactions and investments through financial expertise and strategy."),
    ("Financial Planner", "The Wealth Advisor",
     "Helping clients achieve financial goals through planning, analysis, and advice."),
    ("Portfolio Manager", "The Investment Manager",
     "Managing investment portfolios through analysis, strategy, and risk management."),
    ("Psychologist", "The Mental Health Specialist",
     "Supporting mental health and well-being through psychological assessment and therapy."),
    ("Technical Writer", "The Documentation Expert",
     "Creating clear technical documentation through writing expertise and technical knowledge."),
    ("Policy Analyst", "The Policy Specialist",
     "Analyzing and developing policies through research, evaluation, and strategic thinking."),
    ("UX/UI Designer", "The Creative Innovator",
     "Designing user experiences and interfaces through creative vision and user research."),
    ("Graphic Designer", "The Visual Creator",
     "Creating visual designs and communications through artistic skills and creativity."),
    ("Industrial Designer", "The Product Designer",
     "Designing products and systems through creative problem-solving and technical knowledge."),
    ("Content Producer", "The Content Creator",
     "Creating engaging content through creative storytelling and media production."),
    ("Public Relations Specialist", "The PR Expert",
     "Managing public image and communications through strategic messaging and media relations."),
    ("Digital Editor", "The Digital Content Manager",
     "Curating and editing digital content through editorial expertise and content strategy."),
    ("Network Engineer", "The Network Architect",
     "Designing and maintaining network infrastructure through technical expertise and problem-solving."),
    ("Systems Administrator", "The Systems Manager",
     "Managing IT systems and infrastructure through technical administration and maintenance."),
    ("Solutions Architect", "The Solution Designer",
     "Designing technical solutions through system architecture and integration expertise."),
    ("Digital Marketing Manager", "The Marketing Strategist",
     "Driving marketing success through digital strategies, campaigns, and analytics."),
    ("Brand Strategist", "The Brand Expert",
     "Developing brand identity and positioning through strategic thinking and market analysis."),
    ("Social Media Director", "The Social Media Leader",
     "Leading social media strategy and engagement through content creation and community management."),
    ("Corporate Attorney", "The Legal Advisor",
     "Providing legal counsel and representation through legal expertise and strategic advice."),
    ("Legal Consultant", "The Legal Expert",
     "Offering legal guidance and solutions through legal knowledge and analysis."),
    ("Paralegal", "The Legal Assistant",
     "Supporting legal operations through research, documentation, and administrative assistance."),
    ("Web Developer", "The Web Builder",
     "Building websites and web applications through coding and web technologies."),
    ("Database Administrator", "The Data Manager",
     "Managing databases and data systems through technical administration and optimization."),
    ("Mobile App Developer", "The Mobile Innovator",
     "Creating mobile applications through programming and mobile platform expertise."),
    ("Hotel Manager", "The Hospitality Leader",
     "Managing hotel operations and guest services through hospitality leadership and service excellence."),
    ("Event Coordinator", "The Event Specialist",
     "Planning and executing events through organization, coordination, and attention to detail."),
    ("Tourism Director", "The Tourism Manager",
     "Developing tourism strategies and programs through destination management and marketing."),
];

static PROFILE_INDEX: Lazy<HashMap<&'static str, (&'static str, &'static str)>> = Lazy::new(|| {
    CAREER_PROFILES
        .iter()
        .map(|&(title, persona, focus)| (title, (persona, focus)))
        .collect()
});

/// Persona for a career path
pub fn persona_for(title: &str) -> &'static str {
    PROFILE_INDEX
        .get(title)
        .map(|(persona, _)| *persona)
        .unwrap_or(DEFAULT_PERSONA)
}

/// Core tasks & focus description for a career path
pub fn focus_for(title: &str) -> &'static str {
    PROFILE_INDEX
        .get(title)
        .map(|(_, focus)| *focus)
        .unwrap_or(DEFAULT_FOCUS)
}
