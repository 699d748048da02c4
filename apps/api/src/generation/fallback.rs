//! Fallback Template Engine — deterministic, offline content used whenever the model
//! output is unavailable or unusable.
//!
//! Category lookup is an exact, case-sensitive match on the category name.
//! Unknown categories get the generic templates, never an error.

use url::Url;

/// Canned content for one catalog category. `examples` is optional: some categories
/// only override the tag list and share the generic example text.
#[derive(Debug)]
pub struct CategoryTemplate {
    pub category: &'static str,
    pub examples: Option<&'static str>,
    pub tags: &'static [&'static str],
}

pub static CATEGORY_TEMPLATES: &[CategoryTemplate] = &[
    CategoryTemplate {
        category: "Математика",
        examples: Some(
            "Примеры применения {title} в обучении математике:

📚 **На уроках алгебры:**
- Решение уравнений с подробным объяснением
- Построение графиков функций
- Проверка домашних заданий

📐 **На уроках геометрии:**
- Доказательство теорем
- Вычисление площадей и объемов
- Создание геометрических построений",
        ),
        tags: &[
            "математика",
            "алгебра",
            "геометрия",
            "решение задач",
            "образование",
            "школа",
        ],
    },
    CategoryTemplate {
        category: "Физика",
        examples: Some(
            "Использование {title} на уроках физики:

⚡ **Эксперименты и симуляции:**
- Виртуальные лабораторные работы
- Моделирование физических процессов
- Анализ результатов экспериментов

🔬 **Практическое применение:**
- Решение задач по механике
- Изучение электрических явлений
- Подготовка к экзаменам",
        ),
        tags: &[
            "физика",
            "эксперименты",
            "симуляция",
            "лабораторная работа",
            "наука",
            "образование",
        ],
    },
    CategoryTemplate {
        category: "Английский язык",
        examples: Some(
            "Применение {title} в изучении английского языка:

📝 **Развитие навыков:**
- Проверка грамматики и стиля
- Тренировка произношения
- Расширение словарного запаса

🗣️ **Интерактивная практика:**
- Диалоговые упражнения
- Изучение идиоматических выражений
- Подготовка к языковым экзаменам",
        ),
        tags: &[
            "английский язык",
            "грамматика",
            "произношение",
            "словарь",
            "изучение языков",
            "ESL",
        ],
    },
    CategoryTemplate {
        category: "История",
        examples: None,
        tags: &[
            "история",
            "даты",
            "события",
            "хронология",
            "образование",
            "школа",
        ],
    },
    CategoryTemplate {
        category: "Химия",
        examples: None,
        tags: &[
            "химия",
            "реакции",
            "элементы",
            "лабораторная работа",
            "эксперименты",
            "наука",
        ],
    },
];

const GENERIC_EXAMPLES: &str = "Примеры использования {title}:

🎓 **В образовательном процессе:**
- Подготовка интерактивных уроков
- Создание заданий для учеников
- Оценка и анализ успеваемости

💡 **Повышение эффективности:**
- Автоматизация рутинных задач
- Персонализация обучения
- Быстрый доступ к информации";

const GENERIC_TAGS: &[&str] = &[
    "образование",
    "обучение",
    "AI",
    "технологии",
    "школа",
    "учитель",
];

const INSTRUCTIONS_TEMPLATE: &str = "Пошаговая инструкция по использованию {title}:

1. Откройте сервис в веб-браузере
2. Ознакомьтесь с интерфейсом и основными функциями
3. Следуйте встроенному руководству или туториалу
4. Начните с простых задач для освоения функционала
5. Постепенно переходите к более сложным возможностям
6. Используйте справочные материалы при необходимости
7. Делитесь результатами с коллегами и учениками
8. Регулярно изучайте новые функции и обновления";

/// A host-keyword rule for URL-based descriptions. Any keyword matching selects the template.
#[derive(Debug)]
pub struct DescriptionRule {
    pub keywords: &'static [&'static str],
    pub template: &'static str,
}

/// Evaluated in order; the first rule with a matching keyword wins.
pub static DESCRIPTION_RULES: &[DescriptionRule] = &[
    DescriptionRule {
        keywords: &["chat", "gpt"],
        template: "{title} - мощный AI-ассистент для создания образовательного контента, \
разработки планов уроков и помощи в обучении. Поддерживает множество языков и предметных областей.",
    },
    DescriptionRule {
        keywords: &["math", "calculate"],
        template: "{title} - интеллектуальный инструмент для решения математических задач \
с пошаговыми объяснениями. Поддерживает алгебру, геометрию, анализ и статистику.",
    },
    DescriptionRule {
        keywords: &["translate", "language"],
        template: "{title} - AI-платформа для изучения языков с персонализированным подходом, \
интерактивными упражнениями и проверкой произношения.",
    },
];

const GENERIC_DESCRIPTION: &str = "{title} - современный AI-инструмент для образования, \
который поможет автоматизировать рутинные задачи и сделать обучение более интерактивным и эффективным.";

fn find_template(category: &str) -> Option<&'static CategoryTemplate> {
    CATEGORY_TEMPLATES.iter().find(|t| t.category == category)
}

fn fill_title(template: &str, title: &str) -> String {
    template.replace("{title}", title)
}

/// Generic multi-step usage procedure, parameterized only by title.
pub fn fallback_instructions(title: &str) -> String {
    fill_title(INSTRUCTIONS_TEMPLATE, title)
}

pub fn fallback_examples(title: &str, category: &str) -> String {
    let template = find_template(category)
        .and_then(|t| t.examples)
        .unwrap_or(GENERIC_EXAMPLES);
    fill_title(template, title)
}

pub fn fallback_tags(category: &str) -> Vec<String> {
    find_template(category)
        .map(|t| t.tags)
        .unwrap_or(GENERIC_TAGS)
        .iter()
        .map(|tag| tag.to_string())
        .collect()
}

/// Picks a canned description from the URL host. Unparseable URLs classify as an empty host.
pub fn fallback_description(url: &str, title: &str) -> String {
    let host = Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(str::to_lowercase))
        .unwrap_or_default();

    let template = DESCRIPTION_RULES
        .iter()
        .find(|rule| rule.keywords.iter().any(|k| host.contains(k)))
        .map(|rule| rule.template)
        .unwrap_or(GENERIC_DESCRIPTION);

    fill_title(template, title)
}
