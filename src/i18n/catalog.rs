//! String tables. Both tables must carry the same keys.

pub(super) static FR: &[(&str, &str)] = &[
    // setup
    ("history", "Joueurs connus"),
    ("history_empty", "Aucun joueur enregistré."),
    // board
    ("total", "Total"),
    ("dutch_bonus", "# a réussi son Dutch !"),
    ("dutch_void", "Dutch de # annulé (égalité)."),
    ("dutch_penalty", "Dutch de # raté : +10."),
    ("round_saved", "Manche # enregistrée."),
    ("round_edited", "Manche # modifiée."),
    ("auto_filled", "# complété automatiquement."),
    ("hud", "Total : # / 250"),
    ("dice_label", "Papayoo (M #)"),
    ("color_set", "Couleur Papayoo : #"),
    // end of game
    ("game_over", "Partie Terminée"),
    ("winner", "🏆 Vainqueur : # !"),
    ("winners", "🏆 Vainqueurs : # !"),
    ("final_res", "🏆 Résultats Finaux"),
    ("final_unlocked", "Les scores finaux sont disponibles."),
    ("export_saved", "Classement exporté : #"),
    // reset and language
    ("confirm_reset", "Tout effacer ?"),
    ("reset_done", "Partie effacée."),
    ("reset_cancelled", "Rien n'a été effacé."),
    ("lang_set", "Langue : #"),
    ("no_game", "Aucune partie en cours."),
    // warnings
    ("warn_players", "Il faut au moins # joueurs !"),
    ("warn_too_many", "Au plus # joueurs !"),
    ("warn_duplicate", "Nom en double : # !"),
    ("warn_dealer", "Le donneur # n'existe pas !"),
    ("warn_caller", "Le joueur # n'existe pas !"),
    ("warn_limit", "La limite doit être supérieure à zéro !"),
    ("warn_math", "Le total est de # (attendu 250)."),
    ("warn_dice", "Pas de couleur Papayoo sélectionnée !"),
    ("warn_auto", "Il doit y avoir exactement un champ vide pour utiliser le calcul automatique !"),
    ("warn_auto_range", "Le score manquant (#) est hors limites !"),
    ("warn_count", "Il faut # scores !"),
    ("warn_round", "La manche # n'existe pas !"),
    ("warn_phase", "Action impossible à ce stade de la partie."),
    ("warn_finish", "Les scores finaux se débloquent après # manches."),
    // rules
    ("rules_goal", "But : faire le MOINS de points possible."),
    ("rules_papayoo", "Papayoo : le 7 de la couleur du dé vaut 40 points."),
    ("rules_payoo", "Les Payoo : les cartes Payoo (1-20) valent leur propre valeur."),
    ("rules_deal", "# joueurs : distribuées / écart (gauche)"),
];

pub(super) static EN: &[(&str, &str)] = &[
    // setup
    ("history", "Known players"),
    ("history_empty", "No saved players."),
    // board
    ("total", "Total"),
    ("dutch_bonus", "# made their Dutch!"),
    ("dutch_void", "#'s Dutch is void (tie)."),
    ("dutch_penalty", "#'s Dutch failed: +10."),
    ("round_saved", "Round # saved."),
    ("round_edited", "Round # updated."),
    ("auto_filled", "# filled in automatically."),
    ("hud", "Total: # / 250"),
    ("dice_label", "Papayoo (Round #)"),
    ("color_set", "Papayoo color: #"),
    // end of game
    ("game_over", "Game Over"),
    ("winner", "🏆 Winner: # !"),
    ("winners", "🏆 Winners: # !"),
    ("final_res", "🏆 Final Results"),
    ("final_unlocked", "Final scores are available."),
    ("export_saved", "Ranking exported: #"),
    // reset and language
    ("confirm_reset", "Reset everything?"),
    ("reset_done", "Game cleared."),
    ("reset_cancelled", "Nothing was cleared."),
    ("lang_set", "Language: #"),
    ("no_game", "No game in progress."),
    // warnings
    ("warn_players", "Need at least # players!"),
    ("warn_too_many", "At most # players!"),
    ("warn_duplicate", "Duplicate name: #!"),
    ("warn_dealer", "Dealer # does not exist!"),
    ("warn_caller", "Player # does not exist!"),
    ("warn_limit", "The limit must be greater than zero!"),
    ("warn_math", "Total is # (Expected 250)."),
    ("warn_dice", "No Papayoo color selected!"),
    ("warn_auto", "There must be exactly one empty field to use auto-calc!"),
    ("warn_auto_range", "The missing score (#) is out of range!"),
    ("warn_count", "Expected # scores!"),
    ("warn_round", "Round # does not exist!"),
    ("warn_phase", "That action is not available at this point of the game."),
    ("warn_finish", "Final scores unlock after # rounds."),
    // rules
    ("rules_goal", "Goal: get the LOWEST score."),
    ("rules_papayoo", "Papayoo: the 7 of the dice suit is worth 40 points."),
    ("rules_payoo", "The Payoos: Payoo cards (1-20) are worth their face value."),
    ("rules_deal", "# players: dealt / pass (left)"),
];
