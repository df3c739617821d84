//! Bilingual lexicon: one static table of keyword sets keyed by concept.
//!
//! Each concept carries one synonym set per script. Feature predicates and the
//! keyword section lookup both read from here, so English and Chinese keyword
//! lists cannot drift apart. There is no language detection: a text matches a
//! concept when any of its synonym sets matches.

/// Writing system a synonym set is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Script {
    /// Primary script (English).
    Latin,
    /// Secondary script (Chinese).
    Han,
}

/// How a synonym set's terms are compared against a text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// Exact substring.
    Substring,
    /// Whole whitespace-separated token equality.
    Word,
    /// Substring after lowercasing the text; terms are stored lowercase.
    CaseInsensitive,
}

#[derive(Debug, Clone, Copy)]
pub struct SynonymSet {
    pub script: Script,
    pub mode: MatchMode,
    pub terms: &'static [&'static str],
}

impl SynonymSet {
    pub fn matches(&self, text: &str) -> bool {
        match self.mode {
            MatchMode::Substring => self.terms.iter().any(|term| text.contains(term)),
            MatchMode::Word => text
                .split(char::is_whitespace)
                .any(|word| self.terms.contains(&word)),
            MatchMode::CaseInsensitive => {
                let lower = text.to_lowercase();
                self.terms.iter().any(|term| lower.contains(term))
            }
        }
    }
}

/// Lexical concepts the parser recognises.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Concept {
    JobTitle,
    Degree,
    School,
    Month,
    Season,
    PresentMarker,
    DateMarker,
    SectionTitle,
}

impl Concept {
    pub fn synonym_sets(self) -> &'static [SynonymSet] {
        match self {
            Concept::JobTitle => JOB_TITLE,
            Concept::Degree => DEGREE,
            Concept::School => SCHOOL,
            Concept::Month => MONTH,
            Concept::Season => SEASON,
            Concept::PresentMarker => PRESENT_MARKER,
            Concept::DateMarker => DATE_MARKER,
            Concept::SectionTitle => SECTION_TITLE,
        }
    }

    /// True when any synonym set of this concept matches `text`.
    pub fn matches(self, text: &str) -> bool {
        self.synonym_sets().iter().any(|set| set.matches(text))
    }

    /// True when the synonym set for `script` matches `text`.
    pub fn matches_script(self, script: Script, text: &str) -> bool {
        self.synonym_sets()
            .iter()
            .filter(|set| set.script == script)
            .any(|set| set.matches(text))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Concept tables
// ────────────────────────────────────────────────────────────────────────────

const JOB_TITLE: &[SynonymSet] = &[
    SynonymSet {
        script: Script::Latin,
        mode: MatchMode::Word,
        terms: &[
            "Accountant", "Administrator", "Advisor", "Agent", "Analyst", "Apprentice",
            "Architect", "Assistant", "Associate", "Auditor", "Bartender", "Biologist",
            "Bookkeeper", "Buyer", "Carpenter", "Cashier", "CEO", "Clerk", "Co-op",
            "Co-Founder", "Consultant", "Coordinator", "CTO", "Developer", "Designer",
            "Director", "Driver", "Editor", "Electrician", "Engineer", "Extern", "Founder",
            "Freelancer", "Head", "Intern", "Janitor", "Journalist", "Laborer", "Lawyer",
            "Lead", "Manager", "Mechanic", "Member", "Nurse", "Officer", "Operator",
            "Operation", "Photographer", "President", "Producer", "Recruiter",
            "Representative", "Researcher", "Sales", "Server", "Scientist", "Specialist",
            "Supervisor", "Teacher", "Technician", "Trader", "Trainee", "Treasurer", "Tutor",
            "Vice", "VP", "Volunteer", "Webmaster", "Worker",
        ],
    },
    SynonymSet {
        script: Script::Han,
        mode: MatchMode::Substring,
        terms: &[
            "工程师", "开发", "设计师", "经理", "专员", "主管", "总监", "架构师", "分析师",
            "顾问", "助理", "实习生", "运营", "产品", "测试", "前端", "后端", "全栈", "算法",
            "数据", "研究员", "讲师", "教授", "医生", "护士", "会计", "审计", "律师", "编辑",
            "记者", "销售", "市场", "人事", "行政", "财务", "技术员", "程序员", "项目经理",
        ],
    },
];

const DEGREE: &[SynonymSet] = &[
    SynonymSet {
        script: Script::Latin,
        mode: MatchMode::Substring,
        terms: &["Associate", "Bachelor", "Master", "PhD", "Ph."],
    },
    SynonymSet {
        script: Script::Han,
        mode: MatchMode::Substring,
        terms: &["博士", "硕士", "本科", "学士", "专科", "大专", "研究生", "MBA", "EMBA"],
    },
];

const SCHOOL: &[SynonymSet] = &[
    SynonymSet {
        script: Script::Latin,
        mode: MatchMode::Substring,
        terms: &[
            "College", "University", "Institute", "School", "Academy", "BASIS", "Magnet",
        ],
    },
    SynonymSet {
        script: Script::Han,
        mode: MatchMode::Substring,
        terms: &["大学", "学院", "中学", "高中", "学校"],
    },
];

// Latin months are stored as four-letter prefixes, which also covers the full names.
const MONTH: &[SynonymSet] = &[
    SynonymSet {
        script: Script::Latin,
        mode: MatchMode::Substring,
        terms: &[
            "Janu", "Febr", "Marc", "Apri", "May", "June", "July", "Augu", "Sept", "Octo",
            "Nove", "Dece",
        ],
    },
    SynonymSet {
        script: Script::Han,
        mode: MatchMode::Substring,
        terms: &[
            "一月", "二月", "三月", "四月", "五月", "六月", "七月", "八月", "九月", "十月",
            "十一月", "十二月",
        ],
    },
];

const SEASON: &[SynonymSet] = &[SynonymSet {
    script: Script::Latin,
    mode: MatchMode::Substring,
    terms: &["Summer", "Fall", "Spring", "Winter"],
}];

const PRESENT_MARKER: &[SynonymSet] = &[
    SynonymSet {
        script: Script::Latin,
        mode: MatchMode::Substring,
        terms: &["Present"],
    },
    SynonymSet {
        script: Script::Han,
        mode: MatchMode::Substring,
        terms: &["至今", "现在"],
    },
];

const DATE_MARKER: &[SynonymSet] = &[SynonymSet {
    script: Script::Han,
    mode: MatchMode::Substring,
    terms: &["年", "月", "日", "至", "现在"],
}];

const SECTION_TITLE: &[SynonymSet] = &[
    SynonymSet {
        script: Script::Latin,
        mode: MatchMode::CaseInsensitive,
        terms: &[
            "experience", "education", "project", "skill", "job", "course", "extracurricular",
            "objective", "summary", "award", "honor",
        ],
    },
    SynonymSet {
        script: Script::Han,
        mode: MatchMode::Substring,
        terms: &[
            "工作经历", "工作经验", "实习经历", "实习经验", "教育背景", "教育经历", "学历",
            "项目经历", "项目经验", "项目介绍", "专业技能", "技能", "技术能力", "专业能力",
            "个人信息", "基本信息", "求职意向", "自我评价", "获奖情况", "荣誉奖项", "证书",
            "资格证书", "校园经历", "社团经历", "课外活动", "研究经历", "科研经历", "发表论文",
        ],
    },
];

// ────────────────────────────────────────────────────────────────────────────
// Section name synonyms
// ────────────────────────────────────────────────────────────────────────────

/// Canonical (English, lowercase) section keyword → Chinese section titles.
///
/// Generic fragments such as 经历 alone are left out on purpose: they also occur
/// in 教育经历 and 项目经历 and would resolve the wrong section.
const SECTION_SYNONYMS: &[(&str, &[&str])] = &[
    ("work", &["工作经历", "工作经验", "实习经历", "实习经验"]),
    ("experience", &["工作经历", "工作经验", "实习经历", "实习经验", "职业经历"]),
    ("employment", &["工作"]),
    ("history", &["工作履历"]),
    ("job", &["工作"]),
    ("education", &["教育背景", "教育经历", "学历"]),
    ("project", &["项目经历", "项目经验", "项目介绍"]),
    ("skill", &["专业技能", "技能", "技术能力", "专业能力"]),
    ("summary", &["自我评价", "个人总结", "个人简介"]),
    ("objective", &["求职意向", "求职目标"]),
    ("award", &["获奖情况", "荣誉奖项"]),
    ("honor", &["荣誉"]),
    ("course", &["课程", "课外活动"]),
];

/// Chinese section titles registered for a canonical keyword.
pub fn section_synonyms(canonical: &str) -> &'static [&'static str] {
    SECTION_SYNONYMS
        .iter()
        .find(|(key, _)| *key == canonical)
        .map(|(_, synonyms)| *synonyms)
        .unwrap_or(&[])
}
