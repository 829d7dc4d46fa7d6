use super::view_model::EntryFormViewModel;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::shared::number_format::format_quantity;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_ENTRY;
use contracts::shared::entry_form::{FormSpec, NumericField, TextField};
use leptos::logging::log;
use leptos::prelude::*;
use thaw::*;

#[component]
fn NumberInput(vm: EntryFormViewModel, field: &'static NumericField) -> impl IntoView {
    let name = field.name;
    let unit = if field.unit.is_empty() {
        String::new()
    } else {
        format!(" ({})", field.unit)
    };

    view! {
        <div class="form-group">
            <label for=name>{field.label}{unit}</label>
            <input
                type="number"
                id=name
                min=field.min.to_string()
                max=field.max.map(|m| m.to_string())
                step="any"
                placeholder="0"
                prop:value=move || vm.form.with(|f| f.draft().number_raw(name).to_string())
                on:input=move |ev| vm.set_number(name, event_target_value(&ev))
                disabled=move || vm.is_submitting()
            />
        </div>
    }
}

#[component]
fn TextInput(vm: EntryFormViewModel, field: &'static TextField) -> impl IntoView {
    let name = field.name;
    let value = move || vm.form.with(|f| f.draft().text(name).to_string());
    let label = if field.required {
        format!("{} *", field.label)
    } else {
        field.label.to_string()
    };

    let input = if field.multiline {
        view! {
            <textarea
                id=name
                rows="3"
                prop:value=value
                on:input=move |ev| vm.set_text(name, event_target_value(&ev))
                disabled=move || vm.is_submitting()
            />
        }
        .into_any()
    } else {
        view! {
            <input
                type="text"
                id=name
                prop:value=value
                on:input=move |ev| vm.set_text(name, event_target_value(&ev))
                disabled=move || vm.is_submitting()
            />
        }
        .into_any()
    };

    view! {
        <div class="form-group">
            <label for=name>{label}</label>
            {input}
        </div>
    }
}

/// Data-entry page for any form described by a `FormSpec`.
#[component]
pub fn EntryFormPage(spec: &'static FormSpec) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let vm = EntryFormViewModel::new(spec);

    log!("EntryFormPage CREATED for: '{}'", spec.id);
    on_cleanup(move || log!("EntryFormPage DESTROYED for: '{}'", spec.id));

    // Flag checkboxes sit next to the field they unlock.
    let flag_for = |field: &str| spec.conditional_rules.iter().find(|r| r.field == field);

    let text_fields = spec
        .text_fields
        .iter()
        .map(|field| match flag_for(field.name) {
            Some(rule) => {
                let flag = rule.flag;
                view! {
                    <div class="form-conditional">
                        <label class="form-check">
                            <input
                                type="checkbox"
                                prop:checked=move || vm.form.with(|f| f.draft().flag(flag))
                                on:change=move |ev| vm.set_flag(flag, event_target_checked(&ev))
                                disabled=move || vm.is_submitting()
                            />
                            {rule.flag_label}
                        </label>
                        <Show when=move || vm.form.with(|f| f.draft().flag(flag))>
                            <TextInput vm=vm field=field />
                        </Show>
                    </div>
                }
                .into_any()
            }
            None => view! { <TextInput vm=vm field=field /> }.into_any(),
        })
        .collect_view();

    let total_view = spec.total_unit.map(|unit| {
        view! {
            <div class="entry-form__total">
                <span>"الإجمالي: "</span>
                <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Informative>
                    {move || format_quantity(vm.total(), unit)}
                </Badge>
            </div>
        }
    });

    view! {
        <PageFrame route_id=spec.id category=PAGE_CAT_ENTRY title=spec.title>
            <div class="details-form entry-form">
                <div class="form-group">
                    <label for="date">"التاريخ *"</label>
                    <input
                        type="date"
                        id="date"
                        prop:value=move || vm.form.with(|f| f.draft().date().to_string())
                        on:input=move |ev| vm.set_date(event_target_value(&ev))
                        disabled=move || vm.is_submitting()
                    />
                </div>

                <div class="entry-form__numbers">
                    {spec.numeric_fields.iter().map(|field| view! {
                        <NumberInput vm=vm field=field />
                    }).collect_view()}
                </div>

                {total_view}

                {text_fields}
            </div>

            {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}
            {move || vm.last_accepted.get().map(|date| view! {
                <div class="success">{format!("تم حفظ بيانات يوم {}", date)}</div>
            })}

            <div class="details-actions">
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| vm.submit_command(ctx)
                    disabled=Signal::derive(move || vm.is_submitting())
                >
                    {icon("clipboard")}
                    {move || if vm.is_submitting() { " جاري الحفظ..." } else { " حفظ البيانات" }}
                </Button>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| vm.reset_command()
                    disabled=Signal::derive(move || vm.is_submitting())
                >
                    "مسح"
                </Button>
                <Show when=move || vm.is_submitting()>
                    <Spinner />
                </Show>
            </div>
        </PageFrame>
    }
}
