//! Static phrase data for the generated announcements.
//!
//! Everything here is immutable configuration: the announcement templates,
//! the clinic roster, and the fixed waiting-room messages. Stages iterate
//! these tables exactly once per run.

/// Language code sent to the speech backend.
pub const LANGUAGE: &str = "ar";

/// Prefix for queue-number calls ("announcing client number ...").
pub const NUMBER_CALL_PREFIX: &str = "على العميل رقم";

/// Prefix for clinic calls ("please proceed to ...").
pub const CLINIC_CALL_PREFIX: &str = "التوجه إلى";

/// Clinic roster: id paired with the spoken clinic name.
pub const CLINICS: [(u32, &str); 10] = [
    (1, "عيادة طب الأسرة"),
    (2, "عيادة الباطنة"),
    (3, "عيادة الجراحة"),
    (4, "عيادة الأطفال"),
    (5, "عيادة النساء والتوليد"),
    (6, "عيادة العظام"),
    (7, "عيادة العيون"),
    (8, "عيادة الأنف والأذن"),
    (9, "عيادة الأسنان"),
    (10, "عيادة الجلدية"),
];

/// Waiting-room messages, synthesized verbatim as instant1..instant5.
pub const INSTANT_MESSAGES: [&str; 5] = [
    "اهلاً وهلا بكم فى المركز رجاء الانتظار بالاستراحه",
    "شكراً لصبركم سيتم استدعاؤكم قريباً",
    "يرجى الانتظار حتى يتم استدعاء رقمكم",
    "نرحب بكم في مركزنا الطبي",
    "الرجاء الحفاظ على الهدوء في قاعة الانتظار",
];
