//! Calculatrice entière exacte : le noyau, réutilisable hors de l’UI.

pub mod noyau;
