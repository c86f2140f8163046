//! 自己紹介コンポーネント
//!
//! スキルカードのクリックでギャラリーの絞り込みを通知し、ギャラリーまでスクロールする。

use leptos::prelude::*;
use portfolio_common::{builtin_skills, FilterBus, Skill};
use crate::dom::scroll_to_section;
use crate::view_helpers::skill_card_style;

const STATS: [(&str, &str); 3] = [
    ("15+", "Projects Completed"),
    ("6+", "Core Technologies"),
    ("3+", "Years of Learning"),
];

#[component]
pub fn About(bus: FilterBus) -> impl IntoView {
    let skills = builtin_skills();

    view! {
        <section id="about" class="about">
            <div class="container">
                <header class="about__header">
                    <h2 class="about__title">"About Me"</h2>
                </header>

                <div class="about__content">
                    <div class="about__intro">
                        <div class="about__image">
                            <img src="/Images/me2.png" alt="Dhruv Tikhande" />
                            <div class="about__image-overlay"></div>
                        </div>

                        <div class="about__text">
                            <p class="about__description">
                                "I'm a 3rd-year B.Tech Information Technology student with a strong interest in \
                                Artificial Intelligence, Machine Learning, and software development. I enjoy \
                                solving problems by building practical, real-world applications using modern \
                                technologies."
                            </p>
                            <p class="about__description">
                                "My experience spans across AI-powered web applications, machine learning models, \
                                and interactive game development using Unity. I focus on writing clean code, \
                                understanding core concepts deeply, and continuously improving my skills by \
                                building and deploying meaningful projects."
                            </p>

                            <div class="about__resume">
                                <a href="/Resume.pdf" download="" class="about-resume-btn">"Download Resume"</a>
                            </div>

                            <div class="about__stats">
                                {STATS.into_iter().map(|(number, label)| view! {
                                    <div class="stat">
                                        <span class="stat__number">{number}</span>
                                        <span class="stat__label">{label}</span>
                                    </div>
                                }).collect_view()}
                            </div>
                        </div>
                    </div>

                    <div class="about__skills">
                        <h3 class="skills__title">"Technical Skills"</h3>
                        <div class="skills__grid">
                            {skills.into_iter().enumerate().map(|(index, skill)| {
                                view! { <SkillCard skill=skill index=index bus=bus.clone() /> }
                            }).collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn SkillCard(skill: Skill, index: usize, bus: FilterBus) -> impl IntoView {
    let token = skill.filter_token();
    let title = skill.title;

    let on_click = move |_| {
        let reached = bus.publish(token);
        log::debug!("skill '{}' -> filter '{}' ({} listener(s))", title, token, reached);
        scroll_to_section("portfolio");
    };

    view! {
        <div
            class="skill-card"
            style=skill_card_style(index, skill.color)
            on:click=on_click
        >
            <div class="skill-card__content">
                <h4 class="skill-card__title">{skill.title}</h4>
                <p class="skill-card__description">{skill.description}</p>
            </div>
        </div>
    }
}
