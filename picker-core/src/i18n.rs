//! # Translations
//!
//! Static string tables for every supported [`Language`]. Lookups never fail:
//! an unknown tag resolves to the English table.
//!
//! Weekday arrays are Monday-first to match the grid layout.

use shared::{Language, QuickSelect};

/// Labels for the quick-select shortcuts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuickSelectLabels {
    pub today: &'static str,
    pub tomorrow: &'static str,
    pub yesterday: &'static str,
    pub this_week: &'static str,
    pub last_week: &'static str,
    pub next_week: &'static str,
    pub this_month: &'static str,
    pub last_month: &'static str,
    pub next_month: &'static str,
    pub in_7_days: &'static str,
    pub in_30_days: &'static str,
}

/// Everything a picker needs to render its chrome in one language
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translations {
    pub months: [&'static str; 12],
    pub weekdays: [&'static str; 7],
    pub weekdays_short: [&'static str; 7],
    pub today: &'static str,
    pub clear: &'static str,
    pub select_date: &'static str,
    pub select_time: &'static str,
    pub select_range: &'static str,
    pub start_date: &'static str,
    pub end_date: &'static str,
    pub hours: &'static str,
    pub minutes: &'static str,
    pub ok: &'static str,
    pub week: &'static str,
    pub quick_select: QuickSelectLabels,
}

impl Translations {
    /// Month name for a 1-based month number; out-of-range months clamp
    pub fn month_name(&self, month: u32) -> &'static str {
        let index = month.clamp(1, 12) as usize - 1;
        self.months[index]
    }

    pub fn quick_select_label(&self, shortcut: QuickSelect) -> &'static str {
        let labels = &self.quick_select;
        match shortcut {
            QuickSelect::Today => labels.today,
            QuickSelect::Tomorrow => labels.tomorrow,
            QuickSelect::Yesterday => labels.yesterday,
            QuickSelect::ThisWeek => labels.this_week,
            QuickSelect::LastWeek => labels.last_week,
            QuickSelect::NextWeek => labels.next_week,
            QuickSelect::ThisMonth => labels.this_month,
            QuickSelect::LastMonth => labels.last_month,
            QuickSelect::NextMonth => labels.next_month,
            QuickSelect::In7Days => labels.in_7_days,
            QuickSelect::In30Days => labels.in_30_days,
        }
    }
}

/// Table for a language
pub fn translations(language: Language) -> &'static Translations {
    match language {
        Language::En => &EN,
        Language::Tr => &TR,
        Language::De => &DE,
        Language::Fr => &FR,
        Language::Es => &ES,
        Language::It => &IT,
        Language::Pt => &PT,
        Language::Ru => &RU,
        Language::Ja => &JA,
        Language::Zh => &ZH,
        Language::Ar => &AR,
    }
}

/// Table for a language tag, falling back to English for unknown tags
pub fn translations_for_tag(tag: &str) -> &'static Translations {
    match Language::parse_tag(tag) {
        Some(language) => translations(language),
        None => {
            log::warn!("Unsupported language tag '{}', using English", tag);
            &EN
        }
    }
}

/// The language's own name for itself, for language selectors
pub fn language_name(language: Language) -> &'static str {
    match language {
        Language::En => "English",
        Language::Tr => "Türkçe",
        Language::De => "Deutsch",
        Language::Fr => "Français",
        Language::Es => "Español",
        Language::It => "Italiano",
        Language::Pt => "Português",
        Language::Ru => "Русский",
        Language::Ja => "日本語",
        Language::Zh => "中文",
        Language::Ar => "العربية",
    }
}

static EN: Translations = Translations {
    months: [
        "January", "February", "March", "April", "May", "June",
        "July", "August", "September", "October", "November", "December",
    ],
    weekdays: ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday"],
    weekdays_short: ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"],
    today: "Today",
    clear: "Clear",
    select_date: "Select a date...",
    select_time: "Select date and time...",
    select_range: "Select date range...",
    start_date: "Start",
    end_date: "End",
    hours: "Hours",
    minutes: "Minutes",
    ok: "OK",
    week: "Week",
    quick_select: QuickSelectLabels {
        today: "Today",
        tomorrow: "Tomorrow",
        yesterday: "Yesterday",
        this_week: "This Week",
        last_week: "Last Week",
        next_week: "Next Week",
        this_month: "This Month",
        last_month: "Last Month",
        next_month: "Next Month",
        in_7_days: "In 7 Days",
        in_30_days: "In 30 Days",
    },
};

static TR: Translations = Translations {
    months: [
        "Ocak", "Şubat", "Mart", "Nisan", "Mayıs", "Haziran",
        "Temmuz", "Ağustos", "Eylül", "Ekim", "Kasım", "Aralık",
    ],
    weekdays: ["Pazartesi", "Salı", "Çarşamba", "Perşembe", "Cuma", "Cumartesi", "Pazar"],
    weekdays_short: ["Pzt", "Sal", "Çar", "Per", "Cum", "Cmt", "Paz"],
    today: "Bugün",
    clear: "Temizle",
    select_date: "Bir tarih seçin...",
    select_time: "Tarih ve saat seçin...",
    select_range: "Tarih aralığı seçin...",
    start_date: "Başlangıç",
    end_date: "Bitiş",
    hours: "Saat",
    minutes: "Dakika",
    ok: "Tamam",
    week: "Hafta",
    quick_select: QuickSelectLabels {
        today: "Bugün",
        tomorrow: "Yarın",
        yesterday: "Dün",
        this_week: "Bu Hafta",
        last_week: "Geçen Hafta",
        next_week: "Gelecek Hafta",
        this_month: "Bu Ay",
        last_month: "Geçen Ay",
        next_month: "Gelecek Ay",
        in_7_days: "7 Gün Sonra",
        in_30_days: "30 Gün Sonra",
    },
};

static DE: Translations = Translations {
    months: [
        "Januar", "Februar", "März", "April", "Mai", "Juni",
        "Juli", "August", "September", "Oktober", "November", "Dezember",
    ],
    weekdays: ["Montag", "Dienstag", "Mittwoch", "Donnerstag", "Freitag", "Samstag", "Sonntag"],
    weekdays_short: ["Mo", "Di", "Mi", "Do", "Fr", "Sa", "So"],
    today: "Heute",
    clear: "Löschen",
    select_date: "Datum auswählen...",
    select_time: "Datum und Uhrzeit auswählen...",
    select_range: "Datumsbereich auswählen...",
    start_date: "Anfang",
    end_date: "Ende",
    hours: "Stunden",
    minutes: "Minuten",
    ok: "OK",
    week: "Woche",
    quick_select: QuickSelectLabels {
        today: "Heute",
        tomorrow: "Morgen",
        yesterday: "Gestern",
        this_week: "Diese Woche",
        last_week: "Letzte Woche",
        next_week: "Nächste Woche",
        this_month: "Diesen Monat",
        last_month: "Letzten Monat",
        next_month: "Nächsten Monat",
        in_7_days: "In 7 Tagen",
        in_30_days: "In 30 Tagen",
    },
};

static FR: Translations = Translations {
    months: [
        "Janvier", "Février", "Mars", "Avril", "Mai", "Juin",
        "Juillet", "Août", "Septembre", "Octobre", "Novembre", "Décembre",
    ],
    weekdays: ["Lundi", "Mardi", "Mercredi", "Jeudi", "Vendredi", "Samedi", "Dimanche"],
    weekdays_short: ["Lun", "Mar", "Mer", "Jeu", "Ven", "Sam", "Dim"],
    today: "Aujourd'hui",
    clear: "Effacer",
    select_date: "Sélectionner une date...",
    select_time: "Sélectionner la date et l'heure...",
    select_range: "Sélectionner une plage de dates...",
    start_date: "Début",
    end_date: "Fin",
    hours: "Heures",
    minutes: "Minutes",
    ok: "OK",
    week: "Semaine",
    quick_select: QuickSelectLabels {
        today: "Aujourd'hui",
        tomorrow: "Demain",
        yesterday: "Hier",
        this_week: "Cette Semaine",
        last_week: "Semaine Dernière",
        next_week: "Semaine Prochaine",
        this_month: "Ce Mois",
        last_month: "Mois Dernier",
        next_month: "Mois Prochain",
        in_7_days: "Dans 7 Jours",
        in_30_days: "Dans 30 Jours",
    },
};

static ES: Translations = Translations {
    months: [
        "Enero", "Febrero", "Marzo", "Abril", "Mayo", "Junio",
        "Julio", "Agosto", "Septiembre", "Octubre", "Noviembre", "Diciembre",
    ],
    weekdays: ["Lunes", "Martes", "Miércoles", "Jueves", "Viernes", "Sábado", "Domingo"],
    weekdays_short: ["Lun", "Mar", "Mié", "Jue", "Vie", "Sáb", "Dom"],
    today: "Hoy",
    clear: "Limpiar",
    select_date: "Seleccionar una fecha...",
    select_time: "Seleccionar fecha y hora...",
    select_range: "Seleccionar rango de fechas...",
    start_date: "Inicio",
    end_date: "Fin",
    hours: "Horas",
    minutes: "Minutos",
    ok: "OK",
    week: "Semana",
    quick_select: QuickSelectLabels {
        today: "Hoy",
        tomorrow: "Mañana",
        yesterday: "Ayer",
        this_week: "Esta Semana",
        last_week: "Semana Pasada",
        next_week: "Próxima Semana",
        this_month: "Este Mes",
        last_month: "Mes Pasado",
        next_month: "Próximo Mes",
        in_7_days: "En 7 Días",
        in_30_days: "En 30 Días",
    },
};

static IT: Translations = Translations {
    months: [
        "Gennaio", "Febbraio", "Marzo", "Aprile", "Maggio", "Giugno",
        "Luglio", "Agosto", "Settembre", "Ottobre", "Novembre", "Dicembre",
    ],
    weekdays: ["Lunedì", "Martedì", "Mercoledì", "Giovedì", "Venerdì", "Sabato", "Domenica"],
    weekdays_short: ["Lun", "Mar", "Mer", "Gio", "Ven", "Sab", "Dom"],
    today: "Oggi",
    clear: "Cancella",
    select_date: "Seleziona una data...",
    select_time: "Seleziona data e ora...",
    select_range: "Seleziona intervallo di date...",
    start_date: "Inizio",
    end_date: "Fine",
    hours: "Ore",
    minutes: "Minuti",
    ok: "OK",
    week: "Settimana",
    quick_select: QuickSelectLabels {
        today: "Oggi",
        tomorrow: "Domani",
        yesterday: "Ieri",
        this_week: "Questa Settimana",
        last_week: "Settimana Scorsa",
        next_week: "Prossima Settimana",
        this_month: "Questo Mese",
        last_month: "Mese Scorso",
        next_month: "Prossimo Mese",
        in_7_days: "Tra 7 Giorni",
        in_30_days: "Tra 30 Giorni",
    },
};

static PT: Translations = Translations {
    months: [
        "Janeiro", "Fevereiro", "Março", "Abril", "Maio", "Junho",
        "Julho", "Agosto", "Setembro", "Outubro", "Novembro", "Dezembro",
    ],
    weekdays: [
        "Segunda-feira", "Terça-feira", "Quarta-feira", "Quinta-feira", "Sexta-feira", "Sábado", "Domingo",
    ],
    weekdays_short: ["Seg", "Ter", "Qua", "Qui", "Sex", "Sáb", "Dom"],
    today: "Hoje",
    clear: "Limpar",
    select_date: "Selecione uma data...",
    select_time: "Selecione data e hora...",
    select_range: "Selecione intervalo de datas...",
    start_date: "Início",
    end_date: "Fim",
    hours: "Horas",
    minutes: "Minutos",
    ok: "OK",
    week: "Semana",
    quick_select: QuickSelectLabels {
        today: "Hoje",
        tomorrow: "Amanhã",
        yesterday: "Ontem",
        this_week: "Esta Semana",
        last_week: "Semana Passada",
        next_week: "Próxima Semana",
        this_month: "Este Mês",
        last_month: "Mês Passado",
        next_month: "Próximo Mês",
        in_7_days: "Em 7 Dias",
        in_30_days: "Em 30 Dias",
    },
};

static RU: Translations = Translations {
    months: [
        "Январь", "Февраль", "Март", "Апрель", "Май", "Июнь",
        "Июль", "Август", "Сентябрь", "Октябрь", "Ноябрь", "Декабрь",
    ],
    weekdays: ["Понедельник", "Вторник", "Среда", "Четверг", "Пятница", "Суббота", "Воскресенье"],
    weekdays_short: ["Пн", "Вт", "Ср", "Чт", "Пт", "Сб", "Вс"],
    today: "Сегодня",
    clear: "Очистить",
    select_date: "Выберите дату...",
    select_time: "Выберите дату и время...",
    select_range: "Выберите диапазон дат...",
    start_date: "Начало",
    end_date: "Конец",
    hours: "Часы",
    minutes: "Минуты",
    ok: "ОК",
    week: "Неделя",
    quick_select: QuickSelectLabels {
        today: "Сегодня",
        tomorrow: "Завтра",
        yesterday: "Вчера",
        this_week: "Эта Неделя",
        last_week: "Прошлая Неделя",
        next_week: "Следующая Неделя",
        this_month: "Этот Месяц",
        last_month: "Прошлый Месяц",
        next_month: "Следующий Месяц",
        in_7_days: "Через 7 Дней",
        in_30_days: "Через 30 Дней",
    },
};

static JA: Translations = Translations {
    months: [
        "1月", "2月", "3月", "4月", "5月", "6月",
        "7月", "8月", "9月", "10月", "11月", "12月",
    ],
    weekdays: ["月曜日", "火曜日", "水曜日", "木曜日", "金曜日", "土曜日", "日曜日"],
    weekdays_short: ["月", "火", "水", "木", "金", "土", "日"],
    today: "今日",
    clear: "クリア",
    select_date: "日付を選択...",
    select_time: "日付と時刻を選択...",
    select_range: "日付範囲を選択...",
    start_date: "開始",
    end_date: "終了",
    hours: "時",
    minutes: "分",
    ok: "OK",
    week: "週",
    quick_select: QuickSelectLabels {
        today: "今日",
        tomorrow: "明日",
        yesterday: "昨日",
        this_week: "今週",
        last_week: "先週",
        next_week: "来週",
        this_month: "今月",
        last_month: "先月",
        next_month: "来月",
        in_7_days: "7日後",
        in_30_days: "30日後",
    },
};

static ZH: Translations = Translations {
    months: [
        "一月", "二月", "三月", "四月", "五月", "六月",
        "七月", "八月", "九月", "十月", "十一月", "十二月",
    ],
    weekdays: ["星期一", "星期二", "星期三", "星期四", "星期五", "星期六", "星期日"],
    weekdays_short: ["一", "二", "三", "四", "五", "六", "日"],
    today: "今天",
    clear: "清除",
    select_date: "选择日期...",
    select_time: "选择日期和时间...",
    select_range: "选择日期范围...",
    start_date: "开始",
    end_date: "结束",
    hours: "小时",
    minutes: "分钟",
    ok: "确定",
    week: "周",
    quick_select: QuickSelectLabels {
        today: "今天",
        tomorrow: "明天",
        yesterday: "昨天",
        this_week: "本周",
        last_week: "上周",
        next_week: "下周",
        this_month: "本月",
        last_month: "上月",
        next_month: "下月",
        in_7_days: "7天后",
        in_30_days: "30天后",
    },
};

static AR: Translations = Translations {
    months: [
        "يناير", "فبراير", "مارس", "أبريل", "مايو", "يونيو",
        "يوليو", "أغسطس", "سبتمبر", "أكتوبر", "نوفمبر", "ديسمبر",
    ],
    weekdays: ["الاثنين", "الثلاثاء", "الأربعاء", "الخميس", "الجمعة", "السبت", "الأحد"],
    weekdays_short: ["اث", "ثل", "أر", "خم", "جم", "سب", "أح"],
    today: "اليوم",
    clear: "مسح",
    select_date: "اختر تاريخاً...",
    select_time: "اختر التاريخ والوقت...",
    select_range: "اختر نطاق التاريخ...",
    start_date: "البداية",
    end_date: "النهاية",
    hours: "ساعات",
    minutes: "دقائق",
    ok: "موافق",
    week: "أسبوع",
    quick_select: QuickSelectLabels {
        today: "اليوم",
        tomorrow: "غداً",
        yesterday: "أمس",
        this_week: "هذا الأسبوع",
        last_week: "الأسبوع الماضي",
        next_week: "الأسبوع القادم",
        this_month: "هذا الشهر",
        last_month: "الشهر الماضي",
        next_month: "الشهر القادم",
        in_7_days: "بعد 7 أيام",
        in_30_days: "بعد 30 يوماً",
    },
};
