//! Static portfolio content.

pub const NAME: &str = "Shreelaxmi Hegde";

/// Short name shown as the navigation brand.
pub const BRAND: &str = "SHREELAXMI";

pub const ROLE: &str = "Cyber Security Analyst";

pub const SUMMARY: &str = "Experienced in threat detection, vulnerability assessment, and \
    incident response. Skilled in penetration testing, security monitoring, and network defense.";

pub const ABOUT: [&str; 2] = [
    "I'm a passionate Cybersecurity Analyst with expertise in threat detection, vulnerability \
     assessment, and incident response. Currently pursuing Bachelor of Technology in Cyber \
     Security and Cyber Forensics at SUIET Mukka, Mangalore with a CGPA of 8.9/10.",
    "My experience spans across penetration testing, security monitoring, and network defense \
     using industry-standard tools like Burp Suite, Wireshark, Nmap, and Metasploit. I'm \
     particularly interested in threat hunting, SIEM implementation, and developing innovative \
     security solutions.",
];

pub const CONTACT_PITCH: &str = "Ready to strengthen your cybersecurity posture? Let's connect \
    and discuss how I can help protect your digital assets.";

pub const TAGLINE: &str = "Securing the digital future, one vulnerability at a time.";

/// A titled fact in the about section.
#[derive(Debug, Clone, Copy)]
pub struct Highlight {
    pub title: &'static str,
    pub body: &'static str,
}

pub const CERTIFICATIONS: Highlight = Highlight {
    title: "Certifications",
    body: "AWS Cloud Foundation, Dark Web & Cryptocurrency, Web Application Security",
};

pub const LOCATION: &str = "Bengaluru, India";

pub const FOCUS_AREAS: Highlight = Highlight {
    title: "Focus Areas",
    body: "Threat Detection, VAPT, Incident Response",
};

/// Icon drawn next to a skill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillIcon {
    Shield,
    Eye,
    Terminal,
    Lock,
    Code,
    Server,
}

impl SkillIcon {
    pub fn glyph(self) -> &'static str {
        match self {
            SkillIcon::Shield => "⛨",
            SkillIcon::Eye => "◉",
            SkillIcon::Terminal => ">_",
            SkillIcon::Lock => "⚿",
            SkillIcon::Code => "</>",
            SkillIcon::Server => "▤",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Skill {
    pub name: &'static str,
    pub icon: SkillIcon,
}

const fn skill(name: &'static str, icon: SkillIcon) -> Skill {
    Skill { name, icon }
}

pub const SKILLS: [Skill; 12] = [
    skill("Burp Suite", SkillIcon::Shield),
    skill("Wireshark", SkillIcon::Eye),
    skill("Nmap", SkillIcon::Terminal),
    skill("Metasploit", SkillIcon::Lock),
    skill("Python", SkillIcon::Code),
    skill("Linux", SkillIcon::Terminal),
    skill("SIEM", SkillIcon::Server),
    skill("Vulnerability Assessment", SkillIcon::Shield),
    skill("Penetration Testing", SkillIcon::Lock),
    skill("Incident Response", SkillIcon::Eye),
    skill("Threat Hunting", SkillIcon::Shield),
    skill("Network Security", SkillIcon::Server),
];

#[derive(Debug, Clone, Copy)]
pub struct Experience {
    pub title: &'static str,
    pub organization: &'static str,
    pub duration: &'static str,
    pub description: &'static str,
}

pub const EXPERIENCE: [Experience; 2] = [
    Experience {
        title: "Cyber Security Intern",
        organization: "NullClass Edtech Pvt Ltd",
        duration: "Feb 2024 - May 2024",
        description: "Authored research paper on 3+ live CTF exercises, analyzing advanced \
            exploitation and defense techniques. Conducted OWASP ZAP assessments on 4+ live \
            websites, addressing OWASP Top 10 vulnerabilities.",
    },
    Experience {
        title: "Ethical Hacking and Linux Intern",
        organization: "Thaniya Technologies",
        duration: "Mar 2021 - Dec 2022",
        description: "Built foundational skills in Linux and ethical hacking tools, including \
            DVWA, Shodan, and basic penetration testing techniques. Gained hands-on experience \
            with vulnerability scanning and exploitation methods.",
    },
];

/// A featured project. Links are `None` until published.
#[derive(Debug, Clone, Copy)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    pub demo: Option<&'static str>,
    pub code: Option<&'static str>,
}

pub const PROJECTS: [Project; 3] = [
    Project {
        title: "Phishing Detection and Threat Intelligence Tool",
        description: "Advanced NLP and logistic regression-based tool to analyze emails with \
            96.3% accuracy in detecting phishing attempts.",
        tech: &["Python", "NLP", "Machine Learning", "Logistic Regression"],
        demo: None,
        code: None,
    },
    Project {
        title: "SIEM System Implementation",
        description: "Built comprehensive SIEM system with Kibana, Fluentd, and ElastAlert for \
            real-time threat detection and alerting.",
        tech: &["Kibana", "Fluentd", "ElastAlert", "SIEM", "Security Monitoring"],
        demo: None,
        code: None,
    },
    Project {
        title: "Criminal Face Detection System",
        description: "Developed facial recognition system using Python and OpenCV to assist \
            law enforcement in identifying criminals.",
        tech: &["Python", "OpenCV", "Computer Vision", "Machine Learning"],
        demo: None,
        code: None,
    },
];
