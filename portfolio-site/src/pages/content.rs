use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Portfolio {
    pub title: &'static str,
    pub description: &'static str,
    pub logo: &'static str,
    pub nav: Vec<NavLink>,
    pub hero: Hero,
    pub profile: Profile,
    pub philosophy: Philosophy,
    pub skills: Vec<Skill>,
    pub career: Vec<CareerEntry>,
    pub contact: Contact,
    pub copyright: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct NavLink {
    pub anchor: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Hero {
    pub label: &'static str,
    pub name: &'static str,
    pub lines: Vec<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Profile {
    pub name: &'static str,
    pub romanized: &'static str,
    pub role: &'static str,
    pub bio: &'static str,
    pub details: Vec<Detail>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Detail {
    pub label: &'static str,
    pub value: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Philosophy {
    pub quote_lines: Vec<&'static str>,
    pub text: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Skill {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct CareerEntry {
    pub period: &'static str,
    pub heading: &'static str,
    pub summary: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Contact {
    pub label: &'static str,
    pub heading_lines: Vec<&'static str>,
    pub email: &'static str,
}

impl Default for Portfolio {
    fn default() -> Self {
        Self {
            title: "Kurita | Portfolio",
            description: "Kuritaのポートフォリオサイト",
            logo: "K.",
            nav: ["profile", "philosophy", "skills", "career", "contact"]
                .into_iter()
                .zip(["Profile", "Philosophy", "Skills", "Career", "Contact"])
                .map(|(anchor, label)| NavLink { anchor, label })
                .collect(),
            hero: Hero {
                label: "Portfolio 2024",
                name: "Kurita",
                lines: vec!["創造性と論理性を融合させ、", "新しい価値を生み出す"],
            },
            profile: Profile {
                name: "Kurita",
                romanized: "Kurita",
                role: "Creative Professional",
                bio: "様々な分野で培った経験を活かし、プロジェクトに新しい視点と価値を提供します。\
                      常に学び続け、チームと共に成長することを大切にしています。",
                details: vec![
                    Detail { label: "Location", value: "Tokyo, Japan" },
                    Detail { label: "Expertise", value: "Strategy & Creative" },
                    Detail { label: "Experience", value: "10+ Years" },
                ],
            },
            philosophy: Philosophy {
                quote_lines: vec!["「本質を見極め、", "シンプルに、", "力強く。」"],
                text: "複雑な問題をシンプルな解決策へと導くこと。\
                       それが私の仕事に対する基本姿勢です。\
                       表面的な華やかさではなく、本質的な価値を追求し、\
                       長く愛されるものを創り出すことを目指しています。",
            },
            skills: vec![
                Skill {
                    title: "Strategic Thinking",
                    description: "課題の本質を見極め、最適な解決策を導き出す戦略的思考力",
                },
                Skill {
                    title: "Project Management",
                    description: "複雑なプロジェクトを円滑に推進し、成果へと導くマネジメント力",
                },
                Skill {
                    title: "Team Leadership",
                    description: "多様なメンバーの力を引き出し、チームの成果を最大化するリーダーシップ",
                },
                Skill {
                    title: "Creative Direction",
                    description: "ビジョンを形にし、一貫性のあるクリエイティブを生み出す力",
                },
            ],
            career: vec![
                CareerEntry {
                    period: "2024 —",
                    heading: "現在のポジション",
                    summary: "新たな挑戦と成長を続けながら、より大きな価値創造を目指しています。",
                },
                CareerEntry {
                    period: "2020 — 2023",
                    heading: "リーダーシップの発揮",
                    summary: "チームを率いて複数の重要プロジェクトを成功に導きました。",
                },
                CareerEntry {
                    period: "2015 — 2019",
                    heading: "専門性の確立",
                    summary: "様々な経験を通じて、独自の強みとスタイルを確立しました。",
                },
            ],
            contact: Contact {
                label: "Get in Touch",
                heading_lines: vec!["お気軽に", "ご連絡ください"],
                email: "hello@example.com",
            },
            copyright: "© 2024 Kurita. All rights reserved.",
        }
    }
}
