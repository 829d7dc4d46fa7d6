use crate::layout::global_context::AppGlobalContext;
use contracts::enums::Role;
use contracts::system::auth::LoginError;
use leptos::prelude::*;

fn login_error_message(err: &LoginError) -> String {
    match err {
        LoginError::MissingUsername => "الرجاء إدخال اسم المستخدم".to_string(),
        LoginError::MissingPassword => "الرجاء إدخال كلمة المرور".to_string(),
        LoginError::MissingRole => "الرجاء اختيار الدور الوظيفي".to_string(),
        LoginError::UnknownRole(code) => format!("دور غير معروف: {}", code),
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (role, set_role) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        // A successful login switches AppRoutes to the main layout.
        let outcome = ctx.login(
            &username.get_untracked(),
            &password.get_untracked(),
            &role.get_untracked(),
        );
        match outcome {
            Ok(()) => set_error_message.set(None),
            Err(e) => {
                log::warn!("login rejected: {}", e);
                set_error_message.set(Some(login_error_message(&e)));
            }
        }
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>{ctx.title()}</h1>
                <h2>"تسجيل الدخول"</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="username">"اسم المستخدم"</label>
                        <input
                            type="text"
                            id="username"
                            value=move || username.get()
                            on:input=move |ev| set_username.set(event_target_value(&ev))
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">"كلمة المرور"</label>
                        <input
                            type="password"
                            id="password"
                            value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                        />
                    </div>

                    <div class="form-group">
                        <label for="role">"الدور الوظيفي"</label>
                        <select
                            id="role"
                            prop:value=move || role.get()
                            on:change=move |ev| set_role.set(event_target_value(&ev))
                        >
                            <option value="">"-- اختر الدور --"</option>
                            {Role::all().into_iter().map(|r| view! {
                                <option value=r.code()>{r.display_name()}</option>
                            }).collect_view()}
                        </select>
                    </div>

                    <button type="submit" class="btn-primary">"دخول"</button>
                </form>
            </div>
        </div>
    }
}
