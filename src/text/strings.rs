//! Label table.
//!
//! One row per on-screen label, one column per [`Locale`]. Screens ask for a
//! label and never branch on the locale themselves.

use super::Locale;

/// Capacity the ammo counter subtracts fired shots from.
pub const AMMO_CAPACITY: i32 = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Label {
    LanguageHeading,
    /// Name of the language itself, meant to be drawn in that language's face.
    LanguageName,

    Title,
    TitleInstructions,

    MenuPlay,
    MenuHighScores,
    MenuShop,
    MenuSetting,
    MenuAchievements,
    MenuExit,

    ResultScore,
    ResultBonusCoins,
    ResultLives,
    ResultLives1p,
    ResultLives2p,
    ResultEnemies,
    ResultAccuracy,
    ResultAccuracy1p,
    ResultAccuracy2p,

    NewRecord,
    IntroduceName,
    Username,

    GameOver,
    ContinueOrExit,

    CountdownLevel,
    BonusLife,
    Go,

    ClearContinue,
    ClearExit,

    PauseQuit,
    PauseResume,
    PauseHelp,

    SettingTitle,
    SettingHelpMove,
    SettingHelpBack,
    SettingVolume,
    SettingBgm,
    SettingKeys1p,
    SettingKeys2p,

    ModeTitle,
    ModeInstructions,
    ModePlayer,
    ModeSkill,

    SkinTitle,

    LevelSelectTitle,
    LevelSelectInstructions,

    HighScoreTitle,
    HighScoreInstructions,
    HighScoreMode1p,
    HighScoreMode2p,

    ShopTitle,
    ShopSubtitle,
    ShopBuyHint,
    ShopOwnedHint,
    ShopExitHint,
    ShopCredits,
    ShopSpeed,
    ShopHealth,
    ShopFireRate,
    ShopPrice,

    AchievementCompleted,
    AchievementIncomplete,
}

impl Label {
    pub fn text(self, locale: Locale) -> &'static str {
        self.row()[locale.index()]
    }

    #[rustfmt::skip]
    fn row(self) -> [&'static str; 3] {
        use Label::*;
        match self {
            LanguageHeading => ["Language", "Language", "Language"],
            LanguageName => ["English", "한국어", "中国語"],

            Title => ["Invaders", "인베이더", "侵略者"],
            TitleInstructions => [
                "select with w+s / arrows, confirm with space",
                "w+s나 화살표로 선택하고, 스페이스 바로 선택하세요",
                "用w+s或箭头键选择,用空格键确认",
            ],

            MenuPlay => ["Play", "플레이", "玩儿"],
            MenuHighScores => ["High scores", "하이스코어", "高分"],
            MenuShop => ["Shop", "상점", "商店"],
            MenuSetting => ["Setting", "설정", "设置"],
            MenuAchievements => ["Achievements", "업적", "业绩"],
            MenuExit => ["exit", "나가기", "出口"],

            ResultScore => ["score", "점수", "记分"],
            ResultBonusCoins => ["bonus-coins", "보너스 코인", "奖金硬币"],
            ResultLives => ["lives remaining", "남은 목숨", "剩余寿命"],
            ResultLives1p => ["1p's lives remaining", "1p의 남은 목숨", "1p的剩余寿命"],
            ResultLives2p => ["2p's lives remaining", "2p의 남은 목숨", "2p的剩余寿命"],
            ResultEnemies => ["enemies destroyed", "파괴된 적의 수", "被摧毁的敌人"],
            ResultAccuracy => ["accuracy", "명중률", "精度"],
            ResultAccuracy1p => ["1p's accuracy", "1p의 명중률", "1p的精度"],
            ResultAccuracy2p => ["2p's accuracy", "2p의 명중률", "2p的精度"],

            NewRecord => ["New Record!", "신기록 갱신!", "新记录！"],
            IntroduceName => ["Introduce name:", "이름 입력:", "输入姓名:"],
            Username => ["Username:", "닉네임:", "名称:"],

            GameOver => ["Game Over", "게임 오버!", "比赛结束！"],
            ContinueOrExit => [
                "Press Space to play again, Escape to exit",
                "다시 플레이하려면 스페이스 바를, 나가려면 Esc를 누르세요",
                "按 Space 重新播放, Esc 退出",
            ],

            CountdownLevel => ["Level", "레벨", "水平"],
            BonusLife => ["Bonus life!", "보너스 라이프!", "奖励生命!"],
            Go => ["GO!", "출발!", "走！"],

            ClearContinue => ["Continue", "계속", "继续"],
            ClearExit => ["Exit", "나가기", "出口"],

            PauseQuit => ["Quit", "나가기", "辞去"],
            PauseResume => ["Resume", "돌아가기", "复职"],
            PauseHelp => [
                "Change: Ctrl / Select: Spacebar",
                "바꾸기: Ctrl / 고르기: Spacebar",
                "更改内容: Ctrl / 选择: Spacebar",
            ],

            SettingTitle => ["Setting", "설정", "设置"],
            SettingHelpMove => [
                "Move with UP, DOWN / Select with SPACE",
                "위아래 방향키로 움직이기 / 스페이스 바로 선택하기",
                "使用上移、下移/使用Space选择",
            ],
            SettingHelpBack => ["Press ESC to return", "Esc로 돌아가기", "按ESC键返回"],
            SettingVolume => ["Volume", "음량", "音量"],
            SettingBgm => ["BGM", "BGM", "BGM"],
            SettingKeys1p => ["1P Keys", "1P 키", "1P 按钮"],
            SettingKeys2p => ["2P Keys", "2P 키", "2P 按钮"],

            ModeTitle => ["Select Mode", "모드 선택", "选择模式"],
            ModeInstructions => [
                "select with a+d / arrows, confirm with space",
                "a+d / 방향키로 선택하고, 스페이스 바로 정하세요",
                "用a+d/箭头选择,用空格确认",
            ],
            ModePlayer => ["Player", "플레이어", "球员"],
            ModeSkill => ["Skill Mode", "스킬 모드", "技能模式"],

            SkinTitle => [
                "Select Your Ship Design!",
                "우주선의 디자인을 고르세요!",
                "选择您的船舶设计！",
            ],

            LevelSelectTitle => ["Select Level", "레벨 선택", "选择级别"],
            LevelSelectInstructions => [
                "select with w+s / arrows, confirm with space",
                "w+s나 화살표로 선택하고, 스페이스 바로 선택하세요",
                "用w+s或箭头键选择,用空格键确认",
            ],

            HighScoreTitle => ["High Scores", "하이 스코어", "高分"],
            HighScoreInstructions => [
                "Press Space to return",
                "돌아가려면 스페이스 바를 누르세요",
                "按Space返回",
            ],
            HighScoreMode1p => ["1P_Mode", "1P_모드", "1P_模式"],
            HighScoreMode2p => ["2P_Mode", "2P_모드", "2P_模式"],

            ShopTitle => ["Item Shop", "아이템 상점", "道具商店"],
            ShopSubtitle => [
                "Buy Your Upgrades Here!",
                "여기서 업그레이드를 구매하세요!",
                "在这里购买升级！",
            ],
            ShopBuyHint => ["Press Space to Buy", "스페이스 바로 구매하기", "按Space购买"],
            ShopOwnedHint => [
                "*If Player has the item already, Can't buy.*",
                "*이미 가진 아이템은 살 수 없습니다.*",
                "*已拥有的物品无法购买。*",
            ],
            ShopExitHint => ["Press Esc to Go to Menu", "Esc로 메뉴로 돌아가기", "按Esc返回菜单"],
            ShopCredits => ["Current credits :", "현재 크레딧 :", "当前积分 :"],
            ShopSpeed => ["Speed", "속도", "速度"],
            ShopHealth => ["Additional Health", "추가 체력", "额外生命"],
            ShopFireRate => ["Shooting Faster", "빠른 사격", "更快射击"],
            ShopPrice => ["Price: $", "가격: $", "价格: $"],

            AchievementCompleted => ["Completed", "달성", "已完成"],
            AchievementIncomplete => ["Incomplete", "미달성", "未完成"],
        }
    }
}

/// Four-digit zero-padded score, as shown on the HUD and result screens.
pub fn score_text(score: u32) -> String {
    format!("{score:04}")
}

/// `BUL: {remaining}/{magazine}`.
pub fn ammo_text(magazine: i32, fired: i32) -> String {
    format!("BUL: {}/{}", AMMO_CAPACITY - fired, magazine)
}

/// Ratio in `0.0..=1.0` shown as a percentage with two decimals.
pub fn percent_text(ratio: f32) -> String {
    format!("{:.2}%", ratio * 100.0)
}

/// Heading of the level-clear screen. Word order differs per language.
pub fn clear_title(locale: Locale, level: u32) -> String {
    match locale {
        Locale::Default => format!("LEVEL  {level}  Clear"),
        Locale::Korean => format!("레벨 {level}클리어!"),
        Locale::Chinese => format!("{level}级清除！"),
    }
}

/// Countdown banner shown before a level starts.
pub fn level_banner(locale: Locale, level: u32, bonus_life: bool) -> String {
    let level_word = Label::CountdownLevel.text(locale);
    if bonus_life {
        format!("{level_word} {level} - {}", Label::BonusLife.text(locale))
    } else {
        format!("{level_word} {level}")
    }
}
