//! Built-in sample job descriptions for six common roles.

pub const SAMPLE_ROLES: &[(&str, &str)] = &[
    (
        "Software Engineer",
        "We are seeking a Software Engineer proficient in Python, Java, and SQL with experience \
         in cloud platforms like AWS or Azure. The role involves designing scalable software \
         systems, working with REST APIs, version control (Git), and Agile methodologies.",
    ),
    (
        "Machine Learning Engineer",
        "We are hiring a Machine Learning Engineer skilled in Python, TensorFlow or PyTorch, \
         data preprocessing, and model deployment. The candidate should have strong knowledge \
         of statistics, feature engineering, and cloud ML services.",
    ),
    (
        "Full Stack Developer",
        "Looking for a Full Stack Developer experienced with HTML, CSS, JavaScript, React, \
         Node.js, and MongoDB. Knowledge of REST APIs, version control, CI/CD pipelines, and \
         deployment on cloud platforms is a must.",
    ),
    (
        "Data Analyst",
        "We need a Data Analyst skilled in SQL, Excel, Power BI or Tableau, and Python for data \
         cleaning and visualization. The role requires strong problem-solving skills and ability \
         to generate insights from large datasets.",
    ),
    (
        "DevOps Engineer",
        "Hiring a DevOps Engineer with expertise in CI/CD pipelines, Docker, Kubernetes, \
         Jenkins, and cloud platforms (AWS/GCP/Azure). The role includes automating deployments, \
         monitoring, and ensuring system reliability.",
    ),
    (
        "Cybersecurity Specialist",
        "We are looking for a Cybersecurity Specialist familiar with penetration testing, \
         network security, firewalls, encryption, and threat detection. Knowledge of security \
         compliance frameworks (ISO, NIST) is preferred.",
    ),
];

pub fn sample_jd(name: &str) -> Option<&'static str> {
    SAMPLE_ROLES
        .iter()
        .find(|(role, _)| role.eq_ignore_ascii_case(name))
        .map(|(_, jd)| *jd)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn six_roles_with_nonempty_descriptions() {
        assert_eq!(SAMPLE_ROLES.len(), 6);
        for (name, jd) in SAMPLE_ROLES {
            assert!(!name.is_empty());
            assert!(!jd.trim().is_empty());
        }
    }

    #[test]
    fn lookup_is_case_insensitive() {
        assert!(sample_jd("devops engineer").is_some());
        assert!(sample_jd("Astronaut").is_none());
    }
}
