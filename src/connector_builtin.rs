//! The roster compiled into the binary.
//!
//! Used when no external source is configured, and as sample data.

use async_trait::async_trait;

use crate::error::RosterError;
use crate::ingest::build_profile;
use crate::models::Profile;
use crate::traits::RosterSource;

struct Entry {
    name: &'static str,
    organization: &'static str,
    title: &'static str,
    fields: &'static [&'static str],
    description: &'static str,
    support_types: &'static [&'static str],
    region: &'static str,
    email: &'static str,
    phone: &'static str,
}

const ENTRIES: &[Entry] = &[
    Entry {
        name: "山田 太郎",
        organization: "テクノロジー株式会社",
        title: "AIエンジニア",
        fields: &["AI", "プログラミング", "データサイエンス"],
        description: "AI技術を活用した新しいサービス開発に取り組んでいます。高校生の頃からプログラミングに興味を持ち、大学ではコンピュータサイエンスを専攻しました。",
        support_types: &["オンライン相談", "メール質問", "職場訪問"],
        region: "東京",
        email: "yamada.taro@tech-company.jp",
        phone: "03-1234-5678",
    },
    Entry {
        name: "佐藤 花子",
        organization: "グリーンエネルギー研究所",
        title: "環境研究員",
        fields: &["環境科学", "再生可能エネルギー", "持続可能性"],
        description: "地球環境問題に取り組む研究者です。特に再生可能エネルギーの普及や持続可能な社会づくりに関心があります。高校生との対話を通じて、若い世代の環境意識を高めたいと考えています。",
        support_types: &["オンライン相談", "メール質問"],
        region: "京都",
        email: "hanako.sato@green-energy.org",
        phone: "075-987-6543",
    },
    Entry {
        name: "鈴木 健太",
        organization: "クリエイティブデザイン",
        title: "UIデザイナー",
        fields: &["デザイン", "UI/UX", "アート"],
        description: "ユーザー体験を中心に考えたデザインを日々追求しています。使いやすく美しいインターフェースの設計を専門としています。",
        support_types: &["メール質問", "職場訪問"],
        region: "大阪",
        email: "kenta.suzuki@creative-design.com",
        phone: "06-5432-1098",
    },
    Entry {
        name: "田中 美咲",
        organization: "バイオテック研究所",
        title: "研究員",
        fields: &["生物学", "医療", "バイオテクノロジー"],
        description: "最先端のバイオテクノロジー研究に携わっています。特に遺伝子編集技術に関する研究を行っており、将来の医療技術の進歩に貢献したいと考えています。",
        support_types: &["オンライン相談", "メール質問"],
        region: "筑波",
        email: "misaki.tanaka@biotech-lab.jp",
        phone: "029-876-5432",
    },
];

fn to_vec(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// The embedded roster as profiles, ids `1..=4`.
pub fn builtin_profiles() -> Vec<Profile> {
    ENTRIES
        .iter()
        .enumerate()
        .map(|(i, e)| {
            build_profile(
                i as u32 + 1,
                e.name,
                e.organization,
                e.title,
                to_vec(e.fields),
                e.description,
                to_vec(e.support_types),
                e.region,
                e.email,
                e.phone,
            )
        })
        .collect()
}

pub struct BuiltinSource;

#[async_trait]
impl RosterSource for BuiltinSource {
    fn name(&self) -> &str {
        "builtin"
    }

    fn describe(&self) -> String {
        format!("embedded roster ({} mentors)", ENTRIES.len())
    }

    async fn load(&self) -> Result<Vec<Profile>, RosterError> {
        Ok(builtin_profiles())
    }
}
