//! 組み込みカタログ
//!
//! 自然・動物・感情の3カテゴリ、計19パレット。

use crate::catalog::Catalog;
use crate::palette::Palette;

/// キーワードに一致しなかった場合の既定パレット
pub const DEFAULT_FALLBACK_IDS: [&str; 3] = ["rainbow", "happy", "cute"];

impl Catalog {
    /// 組み込みカタログを取得
    pub fn builtin() -> Self {
        Catalog::new(builtin_palettes()).expect("組み込みカタログが不正です")
    }
}

fn palette(
    id: &str,
    name: &str,
    description: &str,
    category: &str,
    keywords: &[&str],
    colors: &[&str],
) -> Palette {
    Palette {
        id: id.into(),
        keywords: keywords.iter().map(|k| k.to_string()).collect(),
        name: name.into(),
        description: description.into(),
        colors: colors.iter().map(|c| c.to_string()).collect(),
        category: category.into(),
    }
}

fn builtin_palettes() -> Vec<Palette> {
    let mut palettes = Vec::with_capacity(19);
    palettes.extend(nature_palettes());
    palettes.extend(animal_palettes());
    palettes.extend(emotion_palettes());
    palettes
}

/// 自然テーマ
fn nature_palettes() -> Vec<Palette> {
    vec![
        palette(
            "ocean",
            "海洋蓝调",
            "清新的海洋色彩，带来宁静与清凉感",
            "nature",
            &["海洋", "大海", "海水", "蓝色", "海浪", "海滩", "海边", "海洋生物", "鲸鱼", "海豚"],
            &["#0077BE", "#87CEEB", "#E0F6FF", "#4682B4", "#B0E0E6"],
        ),
        palette(
            "forest",
            "森林绿意",
            "自然的绿色系，充满生机与活力",
            "nature",
            &["森林", "树木", "绿色", "叶子", "草地", "植物", "大树", "丛林", "竹子", "松树"],
            &["#228B22", "#90EE90", "#F0FFF0", "#32CD32", "#98FB98"],
        ),
        palette(
            "flower",
            "花园粉韵",
            "温柔的粉色系，如花朵般浪漫",
            "nature",
            &["花朵", "花园", "玫瑰", "郁金香", "樱花", "花瓣", "花束", "鲜花", "花田"],
            &["#FF69B4", "#FFB6C1", "#FFF0F5", "#FF1493", "#FFCCCB"],
        ),
        palette(
            "sunshine",
            "阳光金辉",
            "温暖的黄色系，充满阳光活力",
            "nature",
            &["太阳", "阳光", "黄色", "金色", "向日葵", "明亮", "温暖", "光芒"],
            &["#FFD700", "#FFFF99", "#FFFACD", "#F0E68C", "#FFEFD5"],
        ),
        palette(
            "rainbow",
            "彩虹缤纷",
            "丰富的彩虹色彩，充满童趣",
            "nature",
            &["彩虹", "七彩", "多彩", "缤纷", "色彩", "彩色"],
            &["#FF6B6B", "#4ECDC4", "#45B7D1", "#96CEB4", "#FFEAA7"],
        ),
        palette(
            "snow",
            "雪花纯净",
            "纯净的白色系，如雪花般清新",
            "nature",
            &["雪", "雪花", "冬天", "白色", "冰雪", "雪人", "冰"],
            &["#FFFFFF", "#F0F8FF", "#E6E6FA", "#B0C4DE", "#D3D3D3"],
        ),
        palette(
            "desert",
            "沙漠暖阳",
            "温暖的沙漠色调，充满异域风情",
            "nature",
            &["沙漠", "沙子", "骆驼", "仙人掌", "橙色", "土黄"],
            &["#CD853F", "#F4A460", "#DEB887", "#D2691E", "#FFDEAD"],
        ),
    ]
}

/// 動物テーマ
fn animal_palettes() -> Vec<Palette> {
    vec![
        palette(
            "cat",
            "温暖猫咪",
            "温暖的棕色系，如猫咪般可爱",
            "animal",
            &["小猫", "猫咪", "猫", "喵", "波斯猫", "橘猫", "黑猫", "白猫"],
            &["#D2691E", "#F4A460", "#FFF8DC", "#DEB887", "#FFEFD5"],
        ),
        palette(
            "dog",
            "忠诚小狗",
            "温馨的棕黄色调，如小狗般忠诚",
            "animal",
            &["小狗", "狗狗", "狗", "汪", "金毛", "拉布拉多", "柯基", "哈士奇"],
            &["#8B4513", "#DEB887", "#F5DEB3", "#D2B48C", "#FFEBCD"],
        ),
        palette(
            "butterfly",
            "蝴蝶翩翩",
            "绚烂的彩色系，如蝴蝶般美丽",
            "animal",
            &["蝴蝶", "蛾子", "翅膀", "飞舞", "花蝴蝶"],
            &["#FF6347", "#FFD700", "#9370DB", "#00CED1", "#FF69B4"],
        ),
        palette(
            "bird",
            "自由飞鸟",
            "清新的蓝绿色调，如鸟儿般自由",
            "animal",
            &["小鸟", "鸟儿", "鸟", "麻雀", "燕子", "鹦鹉", "孔雀", "天鹅"],
            &["#4169E1", "#87CEEB", "#98FB98", "#F0E68C", "#FFB6C1"],
        ),
        palette(
            "rabbit",
            "可爱兔子",
            "柔和的粉白色系，如兔子般可爱",
            "animal",
            &["兔子", "小兔", "兔兔", "白兔", "灰兔"],
            &["#FFB6C1", "#FFFFFF", "#F5F5F5", "#E6E6FA", "#FFEFD5"],
        ),
        palette(
            "panda",
            "熊猫经典",
            "经典的黑白配色，如熊猫般憨态可掬",
            "animal",
            &["熊猫", "大熊猫", "国宝", "黑白"],
            &["#000000", "#FFFFFF", "#696969", "#D3D3D3", "#F5F5F5"],
        ),
    ]
}

/// 感情テーマ
fn emotion_palettes() -> Vec<Palette> {
    vec![
        palette(
            "happy",
            "快乐心情",
            "明亮的暖色系，传递快乐与活力",
            "emotion",
            &["快乐", "开心", "高兴", "愉快", "欢乐", "笑容", "微笑"],
            &["#FF6B6B", "#4ECDC4", "#FFE66D", "#A8E6CF", "#FFB3BA"],
        ),
        palette(
            "warm",
            "温暖怀抱",
            "温暖的橙色系，带来舒适感",
            "emotion",
            &["温暖", "舒适", "温馨", "暖和", "拥抱", "家"],
            &["#FF7F50", "#FFA07A", "#FFEFD5", "#F4A460", "#FFCCCB"],
        ),
        palette(
            "dreamy",
            "梦幻童话",
            "柔和的紫色系，充满梦幻色彩",
            "emotion",
            &["梦幻", "童话", "梦想", "仙女", "魔法", "神奇"],
            &["#DDA0DD", "#F0E68C", "#E6E6FA", "#B19CD9", "#FFE4E1"],
        ),
        palette(
            "energetic",
            "活力四射",
            "鲜艳的色彩组合，充满活力",
            "emotion",
            &["活力", "精力", "运动", "跳跃", "奔跑", "活泼"],
            &["#FF4500", "#32CD32", "#FFD700", "#FF69B4", "#00BFFF"],
        ),
        palette(
            "peaceful",
            "宁静致远",
            "清淡的冷色系，带来宁静感",
            "emotion",
            &["宁静", "平静", "安静", "祥和", "冥想", "放松"],
            &["#B0E0E6", "#E0FFFF", "#F0F8FF", "#E6E6FA", "#F5FFFA"],
        ),
        palette(
            "cute",
            "萌萌可爱",
            "粉嫩的色彩搭配，超级可爱",
            "emotion",
            &["可爱", "萌", "甜美", "小巧", "娇小", "软萌"],
            &["#FFB6C1", "#FFCCCB", "#F0E68C", "#E0FFFF", "#FFEFD5"],
        ),
    ]
}
