use std::collections::HashSet;

use thiserror::Error;
use url::Url;

/// Stroke glyphs drawn inline on a 24x24 grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Terminal,
    Globe,
    LineChart,
    Code,
    Calculator,
    BookOpen,
    Layout,
    Database,
    Briefcase,
    Linkedin,
    Link,
    Phone,
    Mail,
    Github,
    MapPin,
    Sparkles,
    Brain,
    GraduationCap,
    Rocket,
    Zap,
    Menu,
    Close,
}

impl Icon {
    pub fn name(self) -> &'static str {
        match self {
            Icon::Terminal => "terminal",
            Icon::Globe => "globe",
            Icon::LineChart => "line-chart",
            Icon::Code => "code",
            Icon::Calculator => "calculator",
            Icon::BookOpen => "book-open",
            Icon::Layout => "layout",
            Icon::Database => "database",
            Icon::Briefcase => "briefcase",
            Icon::Linkedin => "linkedin",
            Icon::Link => "link",
            Icon::Phone => "phone",
            Icon::Mail => "mail",
            Icon::Github => "github",
            Icon::MapPin => "map-pin",
            Icon::Sparkles => "sparkles",
            Icon::Brain => "brain",
            Icon::GraduationCap => "graduation-cap",
            Icon::Rocket => "rocket",
            Icon::Zap => "zap",
            Icon::Menu => "menu",
            Icon::Close => "close",
        }
    }

    /// SVG path data, one entry per `<path>`.
    pub fn paths(self) -> &'static [&'static str] {
        match self {
            Icon::Terminal => &["m4 17 6-6-6-6", "M12 19h8"],
            Icon::Globe => &[
                "M2 12a10 10 0 1 0 20 0a10 10 0 1 0-20 0",
                "M12 2a14.5 14.5 0 0 0 0 20 14.5 14.5 0 0 0 0-20",
                "M2 12h20",
            ],
            Icon::LineChart => &["M3 3v18h18", "m19 9-5 5-4-4-3 3"],
            Icon::Code => &["m18 16 4-4-4-4", "m6 8-4 4 4 4", "m14.5 4-5 16"],
            Icon::Calculator => &[
                "M6 2h12a2 2 0 0 1 2 2v16a2 2 0 0 1-2 2H6a2 2 0 0 1-2-2V4a2 2 0 0 1 2-2z",
                "M8 6h8",
                "M16 14v4",
                "M8 10h.01M12 10h.01M16 10h.01M8 14h.01M12 14h.01M8 18h.01M12 18h.01",
            ],
            Icon::BookOpen => &[
                "M2 3h6a4 4 0 0 1 4 4v14a3 3 0 0 0-3-3H2z",
                "M22 3h-6a4 4 0 0 0-4 4v14a3 3 0 0 1 3-3h7z",
            ],
            Icon::Layout => &["M3 3h18v7H3z", "M3 14h9v7H3z", "M16 14h5v7h-5z"],
            Icon::Database => &[
                "M3 5a9 3 0 1 0 18 0a9 3 0 1 0-18 0",
                "M3 5v14a9 3 0 0 0 18 0V5",
                "M3 12a9 3 0 0 0 18 0",
            ],
            Icon::Briefcase => &[
                "M16 20V4a2 2 0 0 0-2-2h-4a2 2 0 0 0-2 2v16",
                "M4 6h16a2 2 0 0 1 2 2v10a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2z",
            ],
            Icon::Linkedin => &[
                "M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-4 0v7h-4v-7a6 6 0 0 1 6-6z",
                "M2 9h4v12H2z",
                "M2 4a2 2 0 1 0 4 0a2 2 0 1 0-4 0",
            ],
            Icon::Link => &[
                "M10 13a5 5 0 0 0 7.54.54l3-3a5 5 0 0 0-7.07-7.07l-1.72 1.71",
                "M14 11a5 5 0 0 0-7.54-.54l-3 3a5 5 0 0 0 7.07 7.07l1.71-1.71",
            ],
            Icon::Phone => &[
                "M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z",
            ],
            Icon::Mail => &[
                "M4 4h16a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z",
                "m22 7-10 5L2 7",
            ],
            Icon::Github => &[
                "M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.4 5.4 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4",
                "M9 18c-4.51 2-5-2-7-2",
            ],
            Icon::MapPin => &[
                "M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0z",
                "M9 10a3 3 0 1 0 6 0a3 3 0 1 0-6 0",
            ],
            Icon::Sparkles => &[
                "m12 3-1.9 5.8a2 2 0 0 1-1.3 1.3L3 12l5.8 1.9a2 2 0 0 1 1.3 1.3L12 21l1.9-5.8a2 2 0 0 1 1.3-1.3L21 12l-5.8-1.9a2 2 0 0 1-1.3-1.3z",
            ],
            Icon::Brain => &[
                "M12 5a3 3 0 1 0-6 .13 4 4 0 0 0-2.52 5.77 4 4 0 0 0 .55 6.59A4 4 0 1 0 12 18z",
                "M12 5a3 3 0 1 1 6 .13 4 4 0 0 1 2.52 5.77 4 4 0 0 1-.55 6.59A4 4 0 1 1 12 18z",
                "M12 5v13",
            ],
            Icon::GraduationCap => &["M22 10 12 5 2 10l10 5 10-5z", "M6 12v5c3 3 9 3 12 0v-5"],
            Icon::Rocket => &[
                "M4.5 16.5c-1.5 1.26-2 5-2 5s3.74-.5 5-2c.71-.84.7-2.13-.09-2.91a2.18 2.18 0 0 0-2.91-.09z",
                "m12 15-3-3a22 22 0 0 1 2-3.95A12.88 12.88 0 0 1 22 2c0 2.72-.78 7.5-6 11a22.35 22.35 0 0 1-4 2z",
                "M9 12H4s.55-3.03 2-4c1.62-1.08 5 0 5 0",
                "M12 15v5s3.03-.55 4-2c1.08-1.62 0-5 0-5",
            ],
            Icon::Zap => &["M13 2 3 14h9l-1 8 10-12h-9l1-8z"],
            Icon::Menu => &["M4 6h16", "M4 12h16", "M4 18h16"],
            Icon::Close => &["M18 6 6 18", "m6 6 12 12"],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Palette {
    Primary,
    Accent,
    Indigo,
    Amber,
    Emerald,
    Rose,
    Cyan,
    Violet,
    Slate,
}

impl Palette {
    pub fn from_tag(tag: &str) -> Option<Self> {
        let palette = match tag {
            "primary" => Palette::Primary,
            "accent" => Palette::Accent,
            "indigo" => Palette::Indigo,
            "amber" => Palette::Amber,
            "emerald" => Palette::Emerald,
            "rose" => Palette::Rose,
            "cyan" => Palette::Cyan,
            "violet" => Palette::Violet,
            "slate" => Palette::Slate,
            _ => return None,
        };
        Some(palette)
    }

    /// Like [`Palette::from_tag`], but unknown tags fall back to `Primary`.
    pub fn resolve(tag: &str) -> Self {
        Self::from_tag(tag).unwrap_or_else(|| {
            log::warn!("unknown palette tag {tag:?}, using primary");
            Palette::Primary
        })
    }

    pub fn text_class(self) -> &'static str {
        match self {
            Palette::Primary => "text-primary",
            Palette::Accent => "text-accent",
            Palette::Indigo => "text-indigo-400",
            Palette::Amber => "text-amber-400",
            Palette::Emerald => "text-emerald-400",
            Palette::Rose => "text-rose-400",
            Palette::Cyan => "text-cyan-400",
            Palette::Violet => "text-violet-400",
            Palette::Slate => "text-slate-400",
        }
    }

    pub fn hover_border_class(self) -> &'static str {
        match self {
            Palette::Primary => "hover:border-primary/50",
            Palette::Accent => "hover:border-accent/50",
            Palette::Indigo => "hover:border-indigo-400/50",
            Palette::Amber => "hover:border-amber-400/50",
            Palette::Emerald => "hover:border-emerald-400/50",
            Palette::Rose => "hover:border-rose-400/50",
            Palette::Cyan => "hover:border-cyan-400/50",
            Palette::Violet => "hover:border-violet-400/50",
            Palette::Slate => "hover:border-slate-400/50",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BioSpan {
    Plain(&'static str),
    Highlight(&'static str, Palette),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EducationEntry {
    pub icon: Icon,
    /// Palette tag, see [`Palette::resolve`].
    pub color: &'static str,
    pub kind: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
}

impl EducationEntry {
    pub fn palette(&self) -> Palette {
        Palette::resolve(self.color)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExperienceEntry {
    pub period: &'static str,
    pub organization: &'static str,
    pub role: &'static str,
    pub description: &'static str,
    pub current: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelKind {
    Web,
    Messaging,
    Phone,
    Email,
}

impl ChannelKind {
    pub fn scheme(self) -> &'static str {
        match self {
            ChannelKind::Web | ChannelKind::Messaging => "https",
            ChannelKind::Phone => "tel",
            ChannelKind::Email => "mailto",
        }
    }

    /// Whether links of this kind leave the page (and get `target="_blank"`).
    pub fn is_external(self) -> bool {
        matches!(self, ChannelKind::Web | ChannelKind::Messaging)
    }
}

/// Visual weight of a contact icon bubble.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Neutral,
    Highlight,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactChannel {
    pub kind: ChannelKind,
    pub label: &'static str,
    pub caption: &'static str,
    pub destination: &'static str,
    pub icon: Icon,
    pub tone: Tone,
    /// Palette used for the hover accent.
    pub accent: Palette,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillTag(pub &'static str);

#[derive(Debug, Clone, Copy)]
pub struct Profile {
    pub first_name: &'static str,
    pub last_name: &'static str,
    pub full_name: &'static str,
    pub headline: &'static str,
    pub title: &'static str,
    pub specialty: &'static str,
    pub location: &'static str,
    pub tag_line: &'static str,
    pub photo: &'static str,
    pub hero_video: &'static str,
    pub biography: &'static [BioSpan],
    pub education: &'static [EducationEntry],
    pub skills: &'static [SkillTag],
    pub experience: &'static [ExperienceEntry],
    pub contacts: &'static [ContactChannel],
    pub floating: &'static [ContactChannel],
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProfileError {
    #[error("{label}: invalid destination {destination:?}: {reason}")]
    InvalidDestination {
        label: &'static str,
        destination: &'static str,
        reason: String,
    },
    #[error("{label}: expected a {expected}: link, found {found}:")]
    SchemeMismatch {
        label: &'static str,
        expected: &'static str,
        found: String,
    },
    #[error("{count} experience entries are marked as current, at most one allowed")]
    MultipleCurrent { count: usize },
    #[error("skill {0:?} is listed more than once")]
    DuplicateSkill(&'static str),
}

pub fn validate_channel(channel: &ContactChannel) -> Result<(), ProfileError> {
    let url = Url::parse(channel.destination).map_err(|e| ProfileError::InvalidDestination {
        label: channel.label,
        destination: channel.destination,
        reason: e.to_string(),
    })?;
    let expected = channel.kind.scheme();
    if url.scheme() != expected {
        return Err(ProfileError::SchemeMismatch {
            label: channel.label,
            expected,
            found: url.scheme().to_string(),
        });
    }
    Ok(())
}

pub fn validate(profile: &Profile) -> Result<(), ProfileError> {
    profile
        .contacts
        .iter()
        .chain(profile.floating)
        .try_for_each(validate_channel)?;

    let count = profile.experience.iter().filter(|e| e.current).count();
    if count > 1 {
        return Err(ProfileError::MultipleCurrent { count });
    }

    let mut seen = HashSet::new();
    for SkillTag(label) in profile.skills {
        if !seen.insert(*label) {
            return Err(ProfileError::DuplicateSkill(*label));
        }
    }
    Ok(())
}

const LINKEDIN: ContactChannel = ContactChannel {
    kind: ChannelKind::Web,
    label: "LinkedIn",
    caption: "/in/elias-oliveira-a8a655112",
    destination: "https://www.linkedin.com/in/elias-oliveira-a8a655112/",
    icon: Icon::Linkedin,
    tone: Tone::Neutral,
    accent: Palette::Primary,
};

const LATTES: ContactChannel = ContactChannel {
    kind: ChannelKind::Web,
    label: "Currículo Lattes",
    caption: "Acessar Perfil CNPq",
    destination: "https://lattes.cnpq.br/0865708033793942",
    icon: Icon::Link,
    tone: Tone::Neutral,
    accent: Palette::Accent,
};

const WHATSAPP: ContactChannel = ContactChannel {
    kind: ChannelKind::Messaging,
    label: "Telefone / WhatsApp",
    caption: "(75) 9 9197-0787",
    destination: "https://wa.me/5575991970787",
    icon: Icon::Phone,
    tone: Tone::Highlight,
    accent: Palette::Cyan,
};

const COMMERCIAL_PHONE: ContactChannel = ContactChannel {
    kind: ChannelKind::Phone,
    label: "Telefone/Comercial",
    caption: "(83) 9 9901-8375",
    destination: "tel:+5583999018375",
    icon: Icon::Phone,
    tone: Tone::Neutral,
    accent: Palette::Primary,
};

const EMAIL: ContactChannel = ContactChannel {
    kind: ChannelKind::Email,
    label: "E-mail",
    caption: "elias.antoniol@gmail.com",
    destination: "mailto:elias.antoniol@gmail.com",
    icon: Icon::Mail,
    tone: Tone::Neutral,
    accent: Palette::Primary,
};

const GITHUB: ContactChannel = ContactChannel {
    kind: ChannelKind::Web,
    label: "GitHub",
    caption: "/elandeol1969",
    destination: "https://github.com/elandeol1969",
    icon: Icon::Github,
    tone: Tone::Neutral,
    accent: Palette::Primary,
};

pub static PROFILE: Profile = Profile {
    first_name: "Elias",
    last_name: "Oliveira",
    full_name: "Elias Antônio de Oliveira",
    headline: "Analista Consultor de TI",
    title: "Curriculum",
    specialty: "Especialista em Engenharia de Software",
    location: "João Pessoa, PB",
    tag_line: "Perfil em 2026",
    photo: "/Matrix3.png",
    hero_video: "/video_small.mp4",
    biography: &[
        BioSpan::Plain("\"Casado, pai de duas filhas, apreciador incondicional de viagens, boa gastronomia, artes, literatura, cinema, filosofia e apaixonado por "),
        BioSpan::Highlight("ciência", Palette::Primary),
        BioSpan::Plain(", "),
        BioSpan::Highlight("tecnologia", Palette::Accent),
        BioSpan::Plain(", "),
        BioSpan::Highlight("engenharia", Palette::Emerald),
        BioSpan::Plain(", física e matemática como forma de manter o equilíbrio do espírito nas ações pela busca de um mundo sustentável e melhor para a geração atual e para as gerações futuras.\""),
    ],
    education: &[
        EducationEntry {
            icon: Icon::Terminal,
            color: "primary",
            kind: "Pós-Graduação",
            title: "Full Stack & Cloud Computing",
            subtitle: "Especialista (Lato Sensu) • GRAN Faculdade",
        },
        EducationEntry {
            icon: Icon::Terminal,
            color: "primary",
            kind: "Pós-Graduação",
            title: "Engenharia de Software",
            subtitle: "Especialista (Lato Sensu) • UNINTER",
        },
        EducationEntry {
            icon: Icon::Globe,
            color: "emerald",
            kind: "Pós-Graduação",
            title: "Desenvolvimento Regional Sustentável",
            subtitle: "Especialista (Lato Sensu) • UFBA",
        },
        EducationEntry {
            icon: Icon::LineChart,
            color: "accent",
            kind: "Atualização",
            title: "Gerenciamento de Projetos",
            subtitle: "Especialista • FGV",
        },
        EducationEntry {
            icon: Icon::Code,
            color: "indigo",
            kind: "Graduação",
            title: "Análise e Desenvolvimento de Sistemas",
            subtitle: "Graduado • GRAN Faculdade",
        },
        EducationEntry {
            icon: Icon::Calculator,
            color: "amber",
            kind: "Graduação",
            title: "Matemática",
            subtitle: "Graduado • UNINTER",
        },
        EducationEntry {
            icon: Icon::BookOpen,
            color: "rose",
            kind: "Graduação",
            title: "Filosofia",
            subtitle: "Graduado • CESB-ICSH",
        },
        EducationEntry {
            icon: Icon::Layout,
            color: "cyan",
            kind: "Tecnólogo",
            title: "Programação de Computadores",
            subtitle: "Tecnólogo • UNEB",
        },
        EducationEntry {
            icon: Icon::Database,
            color: "violet",
            kind: "Formação",
            title: "Desenvolvedor Full Stack",
            subtitle: "SENAI PB",
        },
        EducationEntry {
            icon: Icon::Briefcase,
            color: "slate",
            kind: "Técnico",
            title: "Contabilidade/Profissionalizante",
            subtitle: "Técnico • Colégio Sete de Setembro",
        },
    ],
    skills: &[
        SkillTag("HTML"),
        SkillTag("CSS"),
        SkillTag("Java"),
        SkillTag("Javascript"),
        SkillTag("Python"),
        SkillTag("React"),
        SkillTag("Node.js"),
        SkillTag("SQL"),
        SkillTag("MySQL"),
        SkillTag("REST"),
        SkillTag("SOAP"),
        SkillTag("POO"),
        SkillTag("UML"),
        SkillTag("SCRUM"),
        SkillTag("XP"),
        SkillTag("Kanban"),
        SkillTag("IA"),
        SkillTag("Engenharia de Software"),
        SkillTag("Elicitação de Requisitos"),
        SkillTag("Projetos de Software"),
        SkillTag("Governança de TI"),
        SkillTag("Cibersegurança"),
        SkillTag("DevOps"),
        SkillTag("DevSecOps"),
        SkillTag("FinOps"),
        SkillTag("CI/CD"),
        SkillTag("UX/UI"),
        SkillTag("ITIL5"),
        SkillTag("Cobit2019"),
        SkillTag("PMBOK7"),
        SkillTag("BPM CBOK 4.0"),
    ],
    experience: &[
        ExperienceEntry {
            period: "Jul 2024 - Presente",
            organization: "RED-e Soluções e Serviços Ltda.",
            role: "Analista Consultor de TI e Sócio-Fundador",
            description: "Atuação como sócio-fundador e consultor de TI, liderando projetos de transformação digital e arquitetura de sistemas de alta performance.",
            current: true,
        },
        ExperienceEntry {
            period: "Jan 2024 - Dez 2024",
            organization: "DATAPREV",
            role: "Analista de TI (Developer)",
            description: "Desenvolvimento e manutenção de sistemas críticos, garantindo alta disponibilidade para serviços de abrangência nacional.",
            current: false,
        },
        ExperienceEntry {
            period: "2013 - 2018",
            organization: "Casa Civil da Presidência da República",
            role: "Assessor da Subchefia de Articulação e Monitoramento (SAM/CC/PR)",
            description: "Atuação no serviço público federal, requisitado para assessoramento estratégico.",
            current: false,
        },
        ExperienceEntry {
            period: "2012",
            organization: "Banco do Brasil & Booz & Company",
            role: "Implementação do Projeto 'Internacionalização'",
            description: "Parceria estratégica para a internacionalização do Banco do Brasil.",
            current: false,
        },
        ExperienceEntry {
            period: "2011",
            organization: "Banco do Brasil (EUA)",
            role: "Gerente de Projeto & Consultor",
            description: "Gerente do Projeto BB USA Service Center em Orlando, FL e Consultor do Projeto BB Américas em Miami, FL.",
            current: false,
        },
        ExperienceEntry {
            period: "2000 - 2011",
            organization: "Banco do Brasil (Head Office - Brasília)",
            role: "Consultor e Analista Sênior",
            description: "Modelagem de Processos, Consultoria de OSM, Gerenciamento de Projetos e Modelagem de Produtos Financeiros. Liderança em projetos estratégicos internacionais.",
            current: false,
        },
        ExperienceEntry {
            period: "1987 - 1999",
            organization: "Banco do Brasil S.A.",
            role: "Cargos Técnicos e Gerenciais",
            description: "Analista Júnior, Pleno e Sênior. Gerente de Equipe, Supervisor e Gerente de Expediente.",
            current: false,
        },
        ExperienceEntry {
            period: "1984 - 1986",
            organization: "Banco do Nordeste",
            role: "Estagiário Técnico em Contabilidade",
            description: "Bolsista de Nível Médio.",
            current: false,
        },
    ],
    contacts: &[LINKEDIN, LATTES, WHATSAPP, COMMERCIAL_PHONE, EMAIL, GITHUB],
    floating: &[LINKEDIN, LATTES, EMAIL, WHATSAPP, GITHUB],
};

#[cfg(test)]
mod tests {
    use super::*;

    fn channel(kind: ChannelKind, destination: &'static str) -> ContactChannel {
        ContactChannel {
            kind,
            label: "test",
            caption: "test",
            destination,
            icon: Icon::Link,
            tone: Tone::Neutral,
            accent: Palette::Primary,
        }
    }

    #[test]
    fn test_shipped_profile_is_valid() {
        assert_eq!(validate(&PROFILE), Ok(()));
        assert_eq!(PROFILE.education.len(), 10);
        assert_eq!(PROFILE.contacts.len(), 6);
        assert_eq!(PROFILE.floating.len(), 5);
    }

    #[test]
    fn test_palette_fallback() {
        assert_eq!(Palette::resolve("amber"), Palette::Amber);
        assert_eq!(Palette::resolve("chartreuse"), Palette::Primary);
        assert_eq!(Palette::resolve(""), Palette::Primary);
        assert_eq!(Palette::from_tag("chartreuse"), None);

        for entry in PROFILE.education {
            assert!(
                Palette::from_tag(entry.color).is_some(),
                "{} uses unknown tag {}",
                entry.title,
                entry.color
            );
        }
    }

    #[test]
    fn test_channel_schemes() {
        assert!(validate_channel(&channel(ChannelKind::Email, "mailto:a@b.com")).is_ok());
        assert!(validate_channel(&channel(ChannelKind::Phone, "tel:+5583999018375")).is_ok());
        assert!(validate_channel(&channel(ChannelKind::Messaging, "https://wa.me/1")).is_ok());

        let res = validate_channel(&channel(ChannelKind::Web, "http://lattes.cnpq.br/1"));
        assert!(matches!(
            res,
            Err(ProfileError::SchemeMismatch { expected: "https", ref found, .. }) if found == "http"
        ));

        let res = validate_channel(&channel(ChannelKind::Email, "tel:+1"));
        assert!(matches!(res, Err(ProfileError::SchemeMismatch { .. })));

        let res = validate_channel(&channel(ChannelKind::Web, "not a url"));
        assert!(matches!(res, Err(ProfileError::InvalidDestination { .. })));
    }

    #[test]
    fn test_multiple_current_rejected() {
        static TWO: [ExperienceEntry; 2] = [
            ExperienceEntry {
                period: "2020",
                organization: "A",
                role: "Role",
                description: "",
                current: true,
            },
            ExperienceEntry {
                period: "2021",
                organization: "B",
                role: "Role",
                description: "",
                current: true,
            },
        ];
        let profile = Profile {
            experience: &TWO,
            ..PROFILE
        };
        assert_eq!(
            validate(&profile),
            Err(ProfileError::MultipleCurrent { count: 2 })
        );
    }

    #[test]
    fn test_duplicate_skill_rejected() {
        static SKILLS: [SkillTag; 3] = [SkillTag("Rust"), SkillTag("SQL"), SkillTag("Rust")];
        let profile = Profile {
            skills: &SKILLS,
            ..PROFILE
        };
        assert_eq!(validate(&profile), Err(ProfileError::DuplicateSkill("Rust")));
    }

    #[test]
    fn test_every_icon_has_glyph() {
        let icons = [
            Icon::Terminal,
            Icon::Globe,
            Icon::LineChart,
            Icon::Code,
            Icon::Calculator,
            Icon::BookOpen,
            Icon::Layout,
            Icon::Database,
            Icon::Briefcase,
            Icon::Linkedin,
            Icon::Link,
            Icon::Phone,
            Icon::Mail,
            Icon::Github,
            Icon::MapPin,
            Icon::Sparkles,
            Icon::Brain,
            Icon::GraduationCap,
            Icon::Rocket,
            Icon::Zap,
            Icon::Menu,
            Icon::Close,
        ];
        let mut names = HashSet::new();
        for icon in icons {
            assert!(!icon.paths().is_empty(), "{icon:?} has no paths");
            assert!(icon.paths().iter().all(|d| !d.is_empty()));
            assert!(names.insert(icon.name()), "{icon:?} reuses a name");
        }
    }

    #[test]
    fn test_external_links() {
        assert!(ChannelKind::Web.is_external());
        assert!(ChannelKind::Messaging.is_external());
        assert!(!ChannelKind::Email.is_external());
        assert!(!ChannelKind::Phone.is_external());
    }
}
