use maud::{html, Markup};

use crate::{
    models::MultiChoice,
    names,
    views::components::enable_on_change,
};

const SUBMIT_BUTTON_ID: &str = "submit-btn";

pub fn choice_form(question_number: u32, choice: &MultiChoice, is_multi: bool) -> Markup {
    html! {
        @if is_multi {
            p class="hint" { "Select all that apply." }
        }
        form hx-post=(names::answer_url(question_number))
             hx-target="main"
             hx-swap="innerHTML"
             id="question-form" {
            fieldset {
                @for opt in &choice.options {
                    label {
                        @if is_multi {
                            input type="checkbox" name="options" value=(opt.id) onchange="enableSubmit()";
                        } @else {
                            input type="radio" name="option" value=(opt.id) onchange="enableSubmit()";
                        }
                        (opt.text)
                    }
                }
            }
            div class="question-actions" {
                input type="submit" id=(SUBMIT_BUTTON_ID) class="nav-btn" value="Submit answer" disabled;
            }
        }
        (enable_on_change(SUBMIT_BUTTON_ID))
    }
}

pub fn choice_review(choice: &MultiChoice, selected: &[String], is_multi: bool) -> Markup {
    html! {
        form {
            fieldset disabled="true" {
                @for opt in &choice.options {
                    @let is_selected = selected.contains(&opt.id);
                    @let is_answer = choice.is_answer(&opt.id);
                    @let css_class = if is_answer {
                        "option-correct"
                    } else if is_selected {
                        "option-incorrect"
                    } else {
                        "option-neutral"
                    };

                    div class=(css_class) {
                        label {
                            @if is_multi {
                                input type="checkbox" name="options" value=(opt.id) checked[is_selected];
                            } @else {
                                input type="radio" name="option" value=(opt.id) checked[is_selected];
                            }
                            (opt.text)
                            @if is_answer {
                                span class="badge-correct" { "Correct" }
                            } @else if is_selected {
                                span class="badge-incorrect" { "Incorrect" }
                            }
                        }
                    }
                }
            }
        }
    }
}
