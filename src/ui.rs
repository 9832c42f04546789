pub mod form;
pub mod list;
pub mod notification;

/// Enter/exit animations for list rows, the editor modal and toasts.
pub const ANIMATIONS: &str = r"
@keyframes row-enter { from { opacity: 0; transform: translateY(-20px); } to { opacity: 1; transform: none; } }
@keyframes row-exit { to { opacity: 0; transform: translateX(-50px); } }
@keyframes modal-enter { from { opacity: 0; transform: scale(0.9); } to { opacity: 1; transform: scale(1); } }
@keyframes toast-life {
    0% { opacity: 0; transform: translateY(-10px); }
    10%, 85% { opacity: 1; transform: none; }
    100% { opacity: 0; visibility: hidden; }
}
.student-row { animation: row-enter 0.3s ease-out both; }
.student-row.row-exit { animation: row-exit 0.3s ease-in forwards; }
.modal-card { animation: modal-enter 0.2s ease-out both; }
.toast { animation: toast-life 4s ease-in-out forwards; }
";
