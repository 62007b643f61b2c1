// src/modules/view/icon.rs
//
// Closed icon vocabulary. Stored records carry free-form identifier
// strings ("SiReact", "FaCode", sometimes plain names like "React");
// resolution maps them onto this enum with a guaranteed fallback arm, so
// an unknown identifier renders the generic code glyph instead of
// breaking the record.

use serde::{Serialize, Serializer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    // React ecosystem
    React,
    NextJs,
    // Languages
    TypeScript,
    JavaScript,
    Python,
    Cplusplus,
    // Styling
    TailwindCss,
    Html5,
    Css3,
    Sass,
    Bootstrap,
    // Backend
    NodeJs,
    Express,
    NestJs,
    GraphQl,
    // Databases
    MongoDb,
    PostgreSql,
    MySql,
    Redis,
    Prisma,
    Supabase,
    Firebase,
    // DevOps & cloud
    Docker,
    Kubernetes,
    Vercel,
    Aws,
    GoogleCloud,
    Linux,
    Nginx,
    // Tools
    Git,
    GitHub,
    Figma,
    // IoT
    Arduino,
    Espressif,
    Mqtt,
    RaspberryPi,
    // Mobile & desktop
    Flutter,
    Electron,
    // Section glyphs
    Lightbulb,
    Rocket,
    Users,
    LaptopCode,
    GraduationCap,
    Briefcase,
    Award,
    // Generic fallback
    Code,
}

impl Icon {
    /// Canonical identifier, kept compatible with what the admin forms
    /// store in `icon` fields.
    pub fn slug(&self) -> &'static str {
        match self {
            Icon::React => "FaReact",
            Icon::NextJs => "SiNextdotjs",
            Icon::TypeScript => "SiTypescript",
            Icon::JavaScript => "SiJavascript",
            Icon::Python => "FaPython",
            Icon::Cplusplus => "SiCplusplus",
            Icon::TailwindCss => "SiTailwindcss",
            Icon::Html5 => "SiHtml5",
            Icon::Css3 => "SiCss3",
            Icon::Sass => "SiSass",
            Icon::Bootstrap => "SiBootstrap",
            Icon::NodeJs => "FaNodeJs",
            Icon::Express => "SiExpress",
            Icon::NestJs => "SiNestjs",
            Icon::GraphQl => "SiGraphql",
            Icon::MongoDb => "SiMongodb",
            Icon::PostgreSql => "SiPostgresql",
            Icon::MySql => "SiMysql",
            Icon::Redis => "SiRedis",
            Icon::Prisma => "SiPrisma",
            Icon::Supabase => "SiSupabase",
            Icon::Firebase => "SiFirebase",
            Icon::Docker => "SiDocker",
            Icon::Kubernetes => "SiKubernetes",
            Icon::Vercel => "SiVercel",
            Icon::Aws => "SiAmazonwebservices",
            Icon::GoogleCloud => "SiGooglecloud",
            Icon::Linux => "SiLinux",
            Icon::Nginx => "SiNginx",
            Icon::Git => "FaGitAlt",
            Icon::GitHub => "SiGithub",
            Icon::Figma => "FaFigma",
            Icon::Arduino => "SiArduino",
            Icon::Espressif => "SiEspressif",
            Icon::Mqtt => "SiMqtt",
            Icon::RaspberryPi => "SiRaspberrypi",
            Icon::Flutter => "SiFlutter",
            Icon::Electron => "SiElectron",
            Icon::Lightbulb => "FaLightbulb",
            Icon::Rocket => "FaRocket",
            Icon::Users => "FaUsers",
            Icon::LaptopCode => "FaLaptopCode",
            Icon::GraduationCap => "FaGraduationCap",
            Icon::Briefcase => "FaBriefcase",
            Icon::Award => "FaAward",
            Icon::Code => "FaCode",
        }
    }

    /// Resolve a stored identifier. Accepts both the library-style slugs
    /// and the plain names the admin sometimes saves; anything unknown
    /// falls back to `Icon::Code` and never fails.
    pub fn from_name(name: &str) -> Icon {
        match name {
            "SiReact" | "FaReact" | "React" => Icon::React,
            "SiNextdotjs" | "Next.js" | "Nextjs" => Icon::NextJs,
            "SiTypescript" | "TypeScript" => Icon::TypeScript,
            "SiJavascript" | "JavaScript" => Icon::JavaScript,
            "SiPython" | "FaPython" | "Python" => Icon::Python,
            "SiCplusplus" | "C++" | "Cpp" => Icon::Cplusplus,
            "SiTailwindcss" | "Tailwind" | "TailwindCSS" | "Tailwind CSS" => Icon::TailwindCss,
            "SiHtml5" | "HTML" => Icon::Html5,
            "SiCss3" | "CSS" => Icon::Css3,
            "SiSass" | "Sass" | "SCSS" => Icon::Sass,
            "SiBootstrap" | "Bootstrap" => Icon::Bootstrap,
            "SiNodedotjs" | "FaNodeJs" | "Node.js" | "NodeJS" => Icon::NodeJs,
            "SiExpress" | "Express" => Icon::Express,
            "SiNestjs" | "NestJS" => Icon::NestJs,
            "SiGraphql" | "GraphQL" => Icon::GraphQl,
            "SiMongodb" | "MongoDB" => Icon::MongoDb,
            "SiPostgresql" | "PostgreSQL" | "Postgres" => Icon::PostgreSql,
            "SiMysql" | "MySQL" => Icon::MySql,
            "SiRedis" | "Redis" => Icon::Redis,
            "SiPrisma" | "Prisma" => Icon::Prisma,
            "SiSupabase" | "Supabase" => Icon::Supabase,
            "SiFirebase" | "Firebase" => Icon::Firebase,
            "SiDocker" | "Docker" => Icon::Docker,
            "SiKubernetes" | "Kubernetes" | "K8s" => Icon::Kubernetes,
            "SiVercel" | "Vercel" => Icon::Vercel,
            "SiAmazonwebservices" | "AWS" => Icon::Aws,
            "SiGooglecloud" | "GCP" => Icon::GoogleCloud,
            "SiLinux" | "Linux" => Icon::Linux,
            "SiNginx" | "Nginx" => Icon::Nginx,
            "SiGit" | "FaGitAlt" | "Git" => Icon::Git,
            "SiGithub" | "GitHub" => Icon::GitHub,
            "SiFigma" | "FaFigma" | "Figma" => Icon::Figma,
            "SiArduino" | "Arduino" => Icon::Arduino,
            "SiEspressif" | "ESP32" | "ESP8266" => Icon::Espressif,
            "SiMqtt" | "MQTT" => Icon::Mqtt,
            "SiRaspberrypi" | "RaspberryPi" | "Raspberry Pi" => Icon::RaspberryPi,
            "SiFlutter" | "Flutter" => Icon::Flutter,
            "SiElectron" | "Electron" => Icon::Electron,
            "FaLightbulb" => Icon::Lightbulb,
            "FaRocket" => Icon::Rocket,
            "FaUsers" => Icon::Users,
            "FaLaptopCode" => Icon::LaptopCode,
            "FaGraduationCap" => Icon::GraduationCap,
            "FaBriefcase" => Icon::Briefcase,
            "FaAward" => Icon::Award,
            _ => Icon::Code,
        }
    }
}

impl Serialize for Icon {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.slug())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_slug_resolves() {
        assert_eq!(Icon::from_name("SiArduino"), Icon::Arduino);
        assert_eq!(Icon::from_name("SiMongodb"), Icon::MongoDb);
    }

    #[test]
    fn test_plain_name_aliases_resolve() {
        assert_eq!(Icon::from_name("React"), Icon::React);
        assert_eq!(Icon::from_name("Tailwind CSS"), Icon::TailwindCss);
        assert_eq!(Icon::from_name("ESP32"), Icon::Espressif);
    }

    #[test]
    fn test_unknown_name_falls_back_to_code() {
        assert_eq!(Icon::from_name("SiRust"), Icon::Code);
        assert_eq!(Icon::from_name(""), Icon::Code);
        assert_eq!(Icon::from_name("NotAnIcon"), Icon::Code);
    }

    #[test]
    fn test_serializes_as_slug() {
        assert_eq!(serde_json::to_string(&Icon::Code).unwrap(), "\"FaCode\"");
        assert_eq!(
            serde_json::to_string(&Icon::NextJs).unwrap(),
            "\"SiNextdotjs\""
        );
    }
}
