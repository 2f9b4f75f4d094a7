use phf::phf_map;
use serde::{Deserialize, Serialize};

/// 考生类别
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// 普通类别 (GM)
    #[default]
    General,
    /// 其他落后阶层
    Obc,
    /// 表列种姓
    Sc,
    /// 表列部落
    St,
}

/// 类别别名，键均为小写
static CATEGORY_ALIASES: phf::Map<&'static str, Category> = phf_map! {
    "general" => Category::General,
    "gen" => Category::General,
    "gm" => Category::General,
    "obc" => Category::Obc,
    "2a" => Category::Obc,
    "2b" => Category::Obc,
    "3a" => Category::Obc,
    "3b" => Category::Obc,
    "sc" => Category::Sc,
    "st" => Category::St,
};

impl Category {
    /// 所有类别
    pub const ALL: [Category; 4] = [Category::General, Category::Obc, Category::Sc, Category::St];

    /// 获取类别键
    pub fn key(self) -> &'static str {
        match self {
            Category::General => "general",
            Category::Obc => "obc",
            Category::Sc => "sc",
            Category::St => "st",
        }
    }

    /// 获取显示名称
    pub fn name(self) -> &'static str {
        match self {
            Category::General => "General",
            Category::Obc => "OBC",
            Category::Sc => "SC",
            Category::St => "ST",
        }
    }

    /// 从字符串解析类别（忽略大小写和首尾空白）
    pub fn parse(s: &str) -> Option<Self> {
        CATEGORY_ALIASES.get(s.trim().to_lowercase().as_str()).copied()
    }

    /// 解析类别，无法识别时按普通类别处理
    pub fn resolve(s: &str) -> Self {
        Self::parse(s).unwrap_or_else(|| {
            tracing::debug!("未知类别 '{}'，按 general 处理", s);
            Category::General
        })
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_keys_and_aliases() {
        for category in Category::ALL {
            assert_eq!(Category::parse(category.key()), Some(category));
        }
        assert_eq!(Category::parse(" OBC "), Some(Category::Obc));
        assert_eq!(Category::parse("GM"), Some(Category::General));
        assert_eq!(Category::parse("3B"), Some(Category::Obc));
        assert_eq!(Category::parse("nri"), None);
    }

    #[test]
    fn test_default_is_general() {
        assert_eq!(Category::default(), Category::General);
    }

    #[test]
    fn test_resolve_defaults_to_general() {
        assert_eq!(Category::resolve("unknown"), Category::General);
        assert_eq!(Category::resolve(""), Category::General);
        assert_eq!(Category::resolve("st"), Category::St);
    }
}
