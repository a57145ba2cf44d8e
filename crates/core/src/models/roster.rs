//! Fixed roster and label constants
//!
//! The attendee roster, location default and category list are fixed for the
//! single organization this tool serves; custom free-text values are layered
//! on top of them at the form level, never added here.

/// The predefined, unchanging list of selectable attendee names.
pub const FIXED_ATTENDEES: [&str; 22] = [
    "한자이", "김재락", "김춘교", "원성원", "황기영",
    "김영미", "윤혜림", "김형곤", "구여필", "노연정",
    "김나혜", "이주영", "이승재", "장동재", "박준영",
    "김소연", "송영숙", "조재석", "송철규", "정유정",
    "이아름", "김민정",
];

/// Location used unless the user opts into a custom value.
pub const DEFAULT_LOCATION: &str = "가곡전수소";

/// Fixed category choices. Free text is allowed when the user opts out.
pub const CATEGORIES: [&str; 3] = ["교육", "전체모임", "전수발표회"];

/// Category label used when a record carries no category.
pub const DEFAULT_CATEGORY: &str = "교육";
